//! TRX and SUN conversions.

/// Number of SUN in one TRX.
pub const SUN_PER_TRX: u64 = 1_000_000;

/// Amount conversion errors
#[derive(Clone, Debug, PartialEq)]
pub enum AmountError {
    /// NaN or infinity
    NotFinite,
    /// Zero or negative amount
    NotPositive(f64),
    /// Less than one SUN after conversion
    TooSmall(f64),
    /// Does not fit into `u64` SUN
    Overflow(f64),
}

impl std::error::Error for AmountError {}
impl std::fmt::Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite => f.write_str("Amount must be a finite number"),
            Self::NotPositive(v) => write!(f, "Amount must be positive, got {v}"),
            Self::TooSmall(v) => write!(f, "Amount {v} is smaller than 1 SUN"),
            Self::Overflow(v) => write!(f, "Amount {v} is too large"),
        }
    }
}

pub fn to_sun(trx: f64) -> Result<u64, AmountError> {
    //! Convert a display amount in TRX to SUN, rounding to the nearest SUN.
    if !trx.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if trx <= 0.0 {
        return Err(AmountError::NotPositive(trx));
    }
    let sun = (trx * SUN_PER_TRX as f64).round();
    if sun < 1.0 {
        Err(AmountError::TooSmall(trx))
    } else if sun >= u64::MAX as f64 {
        Err(AmountError::Overflow(trx))
    } else {
        Ok(sun as u64)
    }
}

pub fn from_sun(sun: u64) -> f64 {
    //! Convert SUN to a display amount in TRX.
    sun as f64 / SUN_PER_TRX as f64
}

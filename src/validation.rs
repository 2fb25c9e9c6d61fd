//! Structural checks for addresses and query parameters.
//!
//! Everything here runs before any network call and never performs I/O.

use crate::address::Address;
use serde_json::Value;

/// Maximal page size accepted by the event server.
pub const MAX_EVENT_PAGE_SIZE: u64 = 200;

/// Query parameter validation errors
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Float, string or other non-integer value.
    NotInteger {
        /// Parameter name
        name: &'static str,
        /// Offending value, as given
        value: String,
    },
    /// Integer below zero.
    Negative {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: i64,
    },
    /// Integer above the allowed maximum.
    TooLarge {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: u64,
        /// Upper bound (inclusive)
        max: u64,
    },
    /// Not `latest`, `earliest` or a non-negative block number.
    InvalidBlock(String),
    /// Filter combination the event server does not support.
    UnsupportedFilter(&'static str),
    /// Not a 32-byte hex transaction ID.
    InvalidTransactionId(String),
    /// Event name is not an identifier.
    InvalidEventName(String),
}

impl std::error::Error for ValidationError {}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInteger { name, value } => {
                write!(f, "Invalid {name} provided: {value} is not an integer")
            }
            Self::Negative { name, value } => {
                write!(f, "Invalid {name} provided: {value} is below minimum 0")
            }
            Self::TooLarge { name, value, max } => {
                write!(f, "Invalid {name} provided: {value} is above maximum {max}")
            }
            Self::InvalidBlock(block) => write!(f, "Invalid block ID provided: {block}"),
            Self::UnsupportedFilter(text) => f.write_str(text),
            Self::InvalidTransactionId(id) => {
                write!(f, "Invalid transaction ID provided: {id:?}")
            }
            Self::InvalidEventName(name) => write!(f, "Invalid event name provided: {name:?}"),
        }
    }
}

pub fn is_valid_address(value: &str) -> bool {
    //! Check that `value` is a well-formed hex or base58 address.
    //!
    //! Only length, version prefix and checksum are checked.
    value.parse::<Address>().is_ok()
}

pub fn assert_integer_in_range<V: Into<Value>>(
    name: &'static str,
    value: V,
    max: Option<u64>,
) -> Result<u64, ValidationError> {
    //! Ensure `value` is an integer in `0..=max` and return it.
    //!
    //! Floats are rejected even when integral (`5.0`).
    let value = value.into();
    let number = match &value {
        Value::Number(n) if n.is_u64() => n.as_u64(),
        Value::Number(n) if n.is_i64() => {
            return Err(ValidationError::Negative {
                name,
                value: n.as_i64().unwrap_or_default(),
            })
        }
        _ => None,
    };
    let number = number.ok_or_else(|| ValidationError::NotInteger {
        name,
        value: value.to_string(),
    })?;
    match max {
        Some(max) if number > max => Err(ValidationError::TooLarge {
            name,
            value: number,
            max,
        }),
        _ => Ok(number),
    }
}

pub fn assert_transaction_id(tx_id: &str) -> Result<(), ValidationError> {
    //! Ensure `tx_id` is 64 hex characters (no `0x` prefix).
    if tx_id.len() == 64 && tx_id.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTransactionId(tx_id.to_string()))
    }
}

pub fn assert_event_name(name: &str) -> Result<(), ValidationError> {
    //! Ensure `name` is a contract identifier, so it occupies exactly
    //! one path segment.
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEventName(name.to_string()))
    }
}

/// Block used by calls that accept a block reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefaultBlock {
    /// Most recent block
    Latest,
    /// Genesis block
    Earliest,
    /// Block height
    Number(u64),
}

impl std::fmt::Display for DefaultBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Earliest => f.write_str("earliest"),
            Self::Number(num) => write!(f, "{num}"),
        }
    }
}

impl std::str::FromStr for DefaultBlock {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            _ if s.is_empty()
                || !s.bytes().all(|b| b.is_ascii_digit())
                || (s.len() > 1 && s.starts_with('0')) =>
            {
                Err(ValidationError::InvalidBlock(s.to_string()))
            }
            _ => s
                .parse::<u64>()
                .map(Self::Number)
                .map_err(|_| ValidationError::InvalidBlock(s.to_string())),
        }
    }
}

impl TryFrom<&str> for DefaultBlock {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<u64> for DefaultBlock {
    type Error = ValidationError;

    fn try_from(num: u64) -> Result<Self, Self::Error> {
        Ok(Self::Number(num))
    }
}

impl TryFrom<i64> for DefaultBlock {
    type Error = ValidationError;

    fn try_from(num: i64) -> Result<Self, Self::Error> {
        u64::try_from(num)
            .map(Self::Number)
            .map_err(|_| ValidationError::InvalidBlock(num.to_string()))
    }
}

impl TryFrom<i32> for DefaultBlock {
    type Error = ValidationError;

    fn try_from(num: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(num))
    }
}

impl TryFrom<&Value> for DefaultBlock {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n
                .as_u64()
                .map(Self::Number)
                .ok_or_else(|| ValidationError::InvalidBlock(n.to_string())),
            other => Err(ValidationError::InvalidBlock(other.to_string())),
        }
    }
}

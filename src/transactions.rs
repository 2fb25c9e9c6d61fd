//! TRON transfer requests.
//!
//! A [`TransactionRequest`] is the body of a `/wallet/createtransaction`
//! call: the node builds the unsigned transaction from it. Construction
//! validates all inputs, so a request that exists is always submittable.
use crate::address::{Address, AddressValidationError};
use crate::currency::{to_sun, AmountError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single TRX transfer request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransactionRequest {
    /// Recipient
    pub to_address: Address,
    /// Sender (account that signs the transaction)
    pub owner_address: Address,
    /// Amount of SUN to transfer.
    pub amount: u64,
}

impl TransactionRequest {
    pub fn transfer(to: &str, amount: f64, from: &str) -> Result<Self, TransactionError> {
        //! Validate and build a transfer of `amount` TRX from `from` to `to`.
        //!
        //! Both addresses may be given in either hex or base58 form;
        //! they are compared after normalization.
        let to_address: Address = to.parse().map_err(TransactionError::InvalidAddress)?;
        let amount = to_sun(amount).map_err(TransactionError::InvalidAmount)?;
        let owner_address: Address = from.parse().map_err(TransactionError::InvalidAddress)?;
        if to_address == owner_address {
            return Err(TransactionError::SameAccount);
        }
        Ok(Self {
            to_address,
            owner_address,
            amount,
        })
    }
}

/// Transfer validation errors
#[derive(Clone, Debug, PartialEq)]
pub enum TransactionError {
    /// Recipient or sender is not a valid address.
    InvalidAddress(AddressValidationError),
    /// Amount is not a positive number of at least one SUN.
    InvalidAmount(AmountError),
    /// Recipient and sender are the same account.
    SameAccount,
    /// No sender given and none configured.
    MissingOwner,
}

impl std::error::Error for TransactionError {}
impl std::fmt::Display for TransactionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddress(e) => write!(f, "Invalid address provided: {e}"),
            Self::InvalidAmount(e) => write!(f, "Invalid amount provided: {e}"),
            Self::SameAccount => f.write_str("Cannot transfer TRX to the same account"),
            Self::MissingOwner => {
                f.write_str("No owner address given and no default address or private key set")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TO: &str = "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL";
    const FROM: &str = "41928c9af0651632157ef27a2cf17ca72c575a4d21";

    #[test]
    fn test_transfer_basic() {
        let tx = TransactionRequest::transfer(TO, 10.5, FROM).unwrap();
        assert_eq!(tx.to_address.to_hex(), "418840e6c55b9ada326d211d818c34a994aeced808");
        assert_eq!(tx.owner_address.to_hex(), FROM);
        assert_eq!(tx.amount, 10_500_000);
    }

    #[test]
    fn test_invalid_recipient_first() {
        // Recipient is validated before the amount.
        assert!(matches!(
            TransactionRequest::transfer("nope", -1.0, FROM),
            Err(TransactionError::InvalidAddress(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_body() {
        let tx = TransactionRequest::transfer(TO, 1.0, FROM).unwrap();
        assert_eq!(
            serde_json::to_value(tx).unwrap(),
            serde_json::json!({
                "to_address": "418840e6c55b9ada326d211d818c34a994aeced808",
                "owner_address": FROM,
                "amount": 1_000_000,
            })
        );
    }
}

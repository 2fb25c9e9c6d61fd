//! Per-client mutable state: private key, default address and default block.

use crate::account::{parse_private_key, private_key_to_hex, KeyError};
use crate::address::{Address, AddressConvertible, AddressValidationError, PrivateKey};
use crate::validation::{DefaultBlock, ValidationError};

/// Default address in both encodings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefaultAddress {
    /// Hex form (`41...`)
    pub hex: String,
    /// Base58 form (`T...`)
    pub base58: String,
}

impl From<Address> for DefaultAddress {
    fn from(address: Address) -> Self {
        Self {
            hex: address.to_hex(),
            base58: address.to_base58(),
        }
    }
}

/// Session state.
///
/// Every setter validates its input first and leaves the state untouched
/// on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    private_key: Option<PrivateKey>,
    default_address: Option<DefaultAddress>,
    default_block: Option<DefaultBlock>,
}

impl Session {
    pub fn new() -> Self {
        //! Create an empty session.
        Self::default()
    }

    pub const fn private_key(&self) -> Option<&PrivateKey> {
        //! Get the private key used for signing.
        self.private_key.as_ref()
    }

    pub fn private_key_hex(&self) -> Option<String> {
        //! Get the private key in canonical lower-case hex.
        self.private_key.as_ref().map(private_key_to_hex)
    }

    pub fn set_private_key(&mut self, key: &str) -> Result<(), KeyError> {
        //! Set the private key used for signing.
        self.private_key = Some(parse_private_key(key)?);
        Ok(())
    }

    pub fn clear_private_key(&mut self) {
        //! Forget the private key.
        self.private_key = None;
    }

    pub const fn default_address(&self) -> Option<&DefaultAddress> {
        //! Get the default address.
        self.default_address.as_ref()
    }

    pub fn set_default_address(&mut self, address: &str) -> Result<(), AddressValidationError> {
        //! Set the address used by calls that do not name one explicitly.
        //!
        //! A private key that does not control this address is cleared.
        let address: Address = address.parse()?;
        if self
            .private_key
            .as_ref()
            .is_some_and(|key| key.address() != address)
        {
            tracing::warn!(
                address = %address,
                "private key does not match new default address, clearing it"
            );
            self.private_key = None;
        }
        self.default_address = Some(address.into());
        Ok(())
    }

    pub const fn default_block(&self) -> Option<DefaultBlock> {
        //! Get the default block.
        self.default_block
    }

    pub fn set_default_block<B>(&mut self, block: B) -> Result<(), ValidationError>
    where
        B: TryInto<DefaultBlock, Error = ValidationError>,
    {
        //! Set the block used as a reference for block queries.
        self.default_block = Some(block.try_into()?);
        Ok(())
    }

    pub fn owner_address(&self) -> Option<Address> {
        //! Address that acts as transaction sender: the default address,
        //! or the address of the private key.
        self.default_address
            .as_ref()
            .and_then(|a| a.hex.parse().ok())
            .or_else(|| self.private_key.as_ref().map(|k| k.address()))
    }
}

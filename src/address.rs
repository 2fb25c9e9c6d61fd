//! TRON address operations and verifications.

use crate::utils::{decode_hex, double_sha256, encode_hex, keccak};
pub use secp256k1::{PublicKey, SecretKey as PrivateKey};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{ops::Deref, result::Result, str::FromStr};

/// TRON address.
///
/// Internally this is the 21-byte form: version prefix `0x41` followed
/// by the public key hash. [`Display`](std::fmt::Display) renders base58,
/// serialization uses hex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 21]);

/// Address parsing errors
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressValidationError {
    /// Wrong number of characters or decoded bytes.
    InvalidLength {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },
    /// Version byte is not `0x41`.
    InvalidPrefix(u8),
    /// Base58-check checksum mismatch.
    InvalidChecksum,
    /// Not a valid hex or base58 string.
    InvalidEncoding(String),
}

impl std::error::Error for AddressValidationError {}
impl std::fmt::Display for AddressValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Invalid address length: expected {expected}, got {got}")
            }
            Self::InvalidPrefix(byte) => write!(f, "Invalid address prefix: 0x{byte:02x}"),
            Self::InvalidChecksum => f.write_str("Invalid address checksum"),
            Self::InvalidEncoding(text) => {
                f.write_str("Invalid address encoding: ")?;
                f.write_str(text)
            }
        }
    }
}

impl Deref for Address {
    type Target = [u8; 21];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl FromStr for Address {
    type Err = AddressValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        //! Parse either a hex or a base58 address.
        if s.len() == Self::BASE58_LENGTH && s.starts_with('T') {
            Self::from_base58(s)
        } else {
            Self::from_hex(s)
        }
    }
}
impl TryFrom<String> for Address {
    type Error = AddressValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl TryFrom<&[u8]> for Address {
    type Error = AddressValidationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; Self::WIDTH] =
            bytes
                .try_into()
                .map_err(|_| AddressValidationError::InvalidLength {
                    expected: Self::WIDTH,
                    got: bytes.len(),
                })?;
        if raw[0] != Self::PREFIX {
            return Err(AddressValidationError::InvalidPrefix(raw[0]));
        }
        Ok(Self(raw))
    }
}
impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_hex()
    }
}
impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl Address {
    /// Size of underlying array in bytes.
    pub const WIDTH: usize = 21;
    /// Network version byte prepended to every address.
    pub const PREFIX: u8 = 0x41;
    /// Length of hex representation (without `0x`).
    pub const HEX_LENGTH: usize = 42;
    /// Length of base58 representation.
    pub const BASE58_LENGTH: usize = 34;

    pub fn from_public_key_hash(hash: [u8; 20]) -> Self {
        //! Build an address from the 20-byte public key hash.
        let mut raw = [Self::PREFIX; Self::WIDTH];
        raw[1..].copy_from_slice(&hash);
        Self(raw)
    }

    pub fn from_hex(s: &str) -> Result<Self, AddressValidationError> {
        //! Parse a hex address (`41...`), `0x` prefix is tolerated.
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if body.len() != Self::HEX_LENGTH {
            return Err(AddressValidationError::InvalidLength {
                expected: Self::HEX_LENGTH,
                got: body.len(),
            });
        }
        let bytes = decode_hex(body)
            .map_err(|e| AddressValidationError::InvalidEncoding(e.to_string()))?;
        Self::try_from(&bytes[..])
    }

    pub fn from_base58(s: &str) -> Result<Self, AddressValidationError> {
        //! Parse a base58-check address (`T...`).
        if s.len() != Self::BASE58_LENGTH {
            return Err(AddressValidationError::InvalidLength {
                expected: Self::BASE58_LENGTH,
                got: s.len(),
            });
        }
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressValidationError::InvalidEncoding(e.to_string()))?;
        if decoded.len() != Self::WIDTH + 4 {
            return Err(AddressValidationError::InvalidLength {
                expected: Self::WIDTH + 4,
                got: decoded.len(),
            });
        }
        let (body, checksum) = decoded.split_at(Self::WIDTH);
        if double_sha256(body)[..4] != *checksum {
            return Err(AddressValidationError::InvalidChecksum);
        }
        Self::try_from(body)
    }

    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        //! Derive the address controlled by a private key.
        private_key.address()
    }

    pub fn to_hex(&self) -> String {
        //! Encode as a lower-case hex string (no `0x` prefix).
        encode_hex(self.0)
    }

    pub fn to_base58(&self) -> String {
        //! Encode as a base58-check string.
        let checksum = double_sha256(self.0);
        let mut payload = self.0.to_vec();
        payload.extend_from_slice(&checksum[..4]);
        bs58::encode(payload).into_string()
    }
}

/// A trait for objects that can generate an on-chain address.
pub trait AddressConvertible {
    /// Create an address
    fn address(&self) -> Address;
}

impl AddressConvertible for PublicKey {
    fn address(&self) -> Address {
        //! Generate address from public key.
        // Get rid of the 0x04 (first byte) at the beginning.
        let hash = keccak(&self.serialize_uncompressed()[1..]);
        // last 20 bytes from the 32 bytes hash.
        let suffix: [u8; 20] = hash[12..32].try_into().expect("Preset slice length");
        Address::from_public_key_hash(suffix)
    }
}

impl AddressConvertible for PrivateKey {
    fn address(&self) -> Address {
        self.public_key(&secp256k1::Secp256k1::signing_only())
            .address()
    }
}

pub fn hex_to_base58(hex_address: &str) -> Result<String, AddressValidationError> {
    //! Convert a hex address to its base58-check form.
    Address::from_hex(hex_address).map(|a| a.to_base58())
}

pub fn base58_to_hex(base58_address: &str) -> Result<String, AddressValidationError> {
    //! Convert a base58-check address to its hex form.
    Address::from_base58(base58_address).map(|a| a.to_hex())
}

pub fn to_hex(address: &str) -> Result<String, AddressValidationError> {
    //! Resolve an address given in either form to hex.
    address.parse::<Address>().map(|a| a.to_hex())
}

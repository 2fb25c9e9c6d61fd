//! Private keys and accounts.

use crate::address::{Address, AddressConvertible, PrivateKey, PublicKey};
use crate::utils::{decode_hex, encode_hex};
use secp256k1::Secp256k1;

/// Private key parsing errors
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyError {
    /// Not a hex string
    InvalidHex(String),
    /// Wrong number of bytes
    InvalidLength(usize),
    /// Bytes are not a valid secp256k1 scalar (zero or above curve order)
    InvalidScalar,
}

impl std::error::Error for KeyError {}
impl std::fmt::Display for KeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(text) => {
                f.write_str("Invalid private key provided: ")?;
                f.write_str(text)
            }
            Self::InvalidLength(len) => {
                write!(f, "Invalid private key provided: expected 32 bytes, got {len}")
            }
            Self::InvalidScalar => f.write_str("Invalid private key provided: not a curve scalar"),
        }
    }
}

pub fn private_key_from_bytes<K: AsRef<[u8]>>(key: K) -> Result<PrivateKey, KeyError> {
    //! Build a private key from raw 32 bytes.
    let key = key.as_ref();
    if key.len() != secp256k1::constants::SECRET_KEY_SIZE {
        return Err(KeyError::InvalidLength(key.len()));
    }
    PrivateKey::from_slice(key).map_err(|_| KeyError::InvalidScalar)
}

pub fn parse_private_key(key: &str) -> Result<PrivateKey, KeyError> {
    //! Parse a hex private key (case-insensitive, `0x` prefix is tolerated).
    let bytes = decode_hex(key.trim()).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
    private_key_from_bytes(bytes)
}

pub fn private_key_to_hex(key: &PrivateKey) -> String {
    //! Canonical lower-case hex form of a private key.
    encode_hex(key.secret_bytes())
}

pub fn derive_address<K: AsRef<[u8]>>(key: K) -> Result<Address, KeyError> {
    //! Derive an address from raw private key bytes.
    private_key_from_bytes(key).map(|k| k.address())
}

pub fn generate_keypair() -> PrivateKey {
    //! Generate a new random private key.
    //!
    //! Uses the thread-local, OS-seeded CSPRNG.
    PrivateKey::new(&mut rand::thread_rng())
}

/// A key pair together with the address it controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Secret key
    pub private_key: PrivateKey,
    /// Matching public key
    pub public_key: PublicKey,
    /// Derived address
    pub address: Address,
}

impl Account {
    pub fn generate() -> Self {
        //! Create an account with a freshly generated key.
        Self::from_private_key(generate_keypair())
    }

    pub fn from_private_key(private_key: PrivateKey) -> Self {
        //! Complete an account from its private key.
        let public_key = private_key.public_key(&Secp256k1::signing_only());
        Self {
            private_key,
            public_key,
            address: public_key.address(),
        }
    }

    pub fn private_key_hex(&self) -> String {
        //! Lower-case hex form of the private key.
        private_key_to_hex(&self.private_key)
    }

    pub fn public_key_hex(&self) -> String {
        //! Uncompressed public key as hex (`04...`).
        encode_hex(self.public_key.serialize_uncompressed())
    }
}

impl std::str::FromStr for Account {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_private_key(s).map(Self::from_private_key)
    }
}

use rustc_hex::{FromHex, FromHexError, ToHex};
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

pub fn keccak<S: AsRef<[u8]>>(bytes: S) -> [u8; 32] {
    //! Compute a Keccak-256 hash (the pre-standard SHA-3 used for addresses).
    let mut hasher = Keccak::v256();
    hasher.update(bytes.as_ref());
    let mut hash = [0; 32];
    hasher.finalize(&mut hash);
    hash
}

/// Alias of [`keccak`], under the name the node APIs use.
pub fn sha3<S: AsRef<[u8]>>(bytes: S) -> [u8; 32] {
    keccak(bytes)
}

pub fn sha256<S: AsRef<[u8]>>(bytes: S) -> [u8; 32] {
    //! Compute a SHA-256 hash.
    let mut hash = [0; 32];
    hash.copy_from_slice(&Sha256::digest(bytes.as_ref()));
    hash
}

pub fn double_sha256<S: AsRef<[u8]>>(bytes: S) -> [u8; 32] {
    //! `sha256(sha256(bytes))`, as used by base58-check.
    sha256(sha256(bytes))
}

pub fn decode_hex(hex: &str) -> Result<Vec<u8>, FromHexError> {
    //! Decode a hex string, with or without `0x` prefix.
    let body = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    body.from_hex()
}

pub fn encode_hex<S: AsRef<[u8]>>(bytes: S) -> String {
    //! Encode bytes as a lower-case hex string without prefix.
    bytes.as_ref().to_hex()
}

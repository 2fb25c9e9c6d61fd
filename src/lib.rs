#![doc(html_root_url = "https://docs.rs/tron-devkit/0.1.0")]
#![warn(rust_2018_idioms, missing_docs)]
#![deny(dead_code, unused_imports, unused_mut)]

//! Rust library to aid coding with TRON: key and address encoding,
//! transfer building and validation, and a client for the HTTP node APIs.
//!
//! This library acts primary as a proxy to several underlying libraries,
//! with the addition of some TRON-specific toolchain components.
//!
//! ## Usage
//!
//! Addresses come in two forms, hex (`41...`) and base58-check (`T...`),
//! and convert into each other losslessly:
//!
//! ```rust
//! use tron_devkit::{base58_to_hex, hex_to_base58, Address};
//!
//! let hex = "418840e6c55b9ada326d211d818c34a994aeced808";
//! let base58 = hex_to_base58(hex).expect("Valid address");
//! assert_eq!(base58, "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL");
//! assert_eq!(base58_to_hex(&base58).expect("Valid address"), hex);
//!
//! let address: Address = base58.parse().expect("Valid address");
//! assert_eq!(address.to_hex(), hex);
//! ```
//!
//! A transfer request is validated locally before anything is sent
//! to a node:
//!
//! ```rust
//! use tron_devkit::transactions::{TransactionError, TransactionRequest};
//!
//! let request = TransactionRequest::transfer(
//!     "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL",
//!     10.5,
//!     "TPL66VK2gCXNCD7EJg9pgJRfqcRazjhUZY",
//! )
//! .expect("Valid transfer");
//! assert_eq!(request.amount, 10_500_000);
//!
//! let err = TransactionRequest::transfer(
//!     "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL",
//!     1.0,
//!     "418840e6c55b9ada326d211d818c34a994aeced808",
//! )
//! .unwrap_err();
//! assert_eq!(err, TransactionError::SameAccount);
//! ```
//!
//! With the `http` feature (enabled by default), [`client::Tron`] talks to
//! full, solidity and event-server nodes.
//!
//! ## Examples
//!
//! You can check out sample usage of this crate in the `demos/`
//! folder in the project repo.
//!
//! ### MSRV
//!
//! Currently it requires rust `1.75.0` or higher to build.
//!
//! ## License
//!
//! This project is licensed under the GNU General Public License v3.

pub mod account;
mod address;
pub use account::{derive_address, generate_keypair, Account, KeyError};
pub use address::{
    base58_to_hex, hex_to_base58, to_hex, Address, AddressConvertible, AddressValidationError,
    PrivateKey, PublicKey,
};
#[cfg(feature = "http")]
pub mod client;
pub mod currency;
#[cfg(feature = "http")]
pub mod network;
pub mod session;
#[cfg(feature = "http")]
mod transaction_builder;
pub mod transactions;
#[cfg(feature = "http")]
pub mod trx;
mod utils;
pub mod validation;
#[cfg(feature = "http")]
pub use transaction_builder::TransactionBuilder;
pub use utils::{decode_hex, double_sha256, encode_hex, keccak, sha256, sha3};
pub use validation::{assert_integer_in_range, is_valid_address};

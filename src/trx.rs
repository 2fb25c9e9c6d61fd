//! Account, block and transaction calls on the full node.

use secp256k1::{Message, Secp256k1};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::address::{Address, AddressConvertible};
use crate::network::{AResult, Method, NodeProvider, TronManager};
use crate::session::Session;
use crate::transaction_builder::TransactionBuilder;
use crate::transactions::TransactionError;
use crate::utils::encode_hex;
use crate::validation::DefaultBlock;

/// Errors of transaction signing and lookups (not related to HTTP failures)
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TrxError {
    /// Signing requires a private key in the session.
    MissingPrivateKey,
    /// Transaction JSON lacks a valid `txID`.
    MalformedTransaction(String),
    /// Transaction already carries a signature.
    AlreadySigned,
    /// Private key does not control the transaction owner address.
    OwnerMismatch {
        /// Address of the private key
        expected: String,
        /// Owner address in the transaction
        got: String,
    },
    /// No transaction with this ID.
    TransactionNotFound(String),
    /// Node refused to build the transaction.
    Rejected(String),
}

impl std::error::Error for TrxError {}
impl std::fmt::Display for TrxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrivateKey => f.write_str("Missing private key"),
            Self::MalformedTransaction(text) => {
                f.write_str("Invalid transaction provided: ")?;
                f.write_str(text)
            }
            Self::AlreadySigned => f.write_str("Transaction is already signed"),
            Self::OwnerMismatch { expected, got } => write!(
                f,
                "Private key does not match address in transaction: expected {expected}, got {got}"
            ),
            Self::TransactionNotFound(id) => write!(f, "Transaction not found: {id}"),
            Self::Rejected(text) => {
                f.write_str("Node rejected the transaction: ")?;
                f.write_str(text.strip_suffix('\n').unwrap_or(text))
            }
        }
    }
}

#[serde_with::serde_as]
#[derive(Deserialize)]
struct UnsignedTransaction {
    #[serde(rename = "txID")]
    #[serde_as(as = "serde_with::hex::Hex")]
    tx_id: [u8; 32],
    #[serde(default)]
    signature: Vec<String>,
}

#[derive(Deserialize)]
struct AccountResponse {
    #[serde(default)]
    balance: u64,
}

/// Trx module, see [`Tron::trx`](crate::client::Tron::trx).
#[derive(Clone, Copy, Debug)]
pub struct Trx<'a, P: NodeProvider> {
    manager: &'a TronManager<P>,
    session: &'a Session,
}

impl<'a, P: NodeProvider> Trx<'a, P> {
    pub const fn new(manager: &'a TronManager<P>, session: &'a Session) -> Self {
        //! Bind the module to a node manager and session.
        Self { manager, session }
    }

    pub async fn get_balance(&self, address: &str) -> AResult<u64> {
        //! Retrieve account balance in SUN. Accounts unknown to the node
        //! have zero balance.
        let address: Address = address.parse()?;
        let response = self
            .manager
            .request(
                "/wallet/getaccount",
                Some(&json!({ "address": address.to_hex() })),
                Method::Post,
            )
            .await?;
        let account: AccountResponse = serde_json::from_value(response)?;
        Ok(account.balance)
    }

    pub async fn get_current_block(&self) -> AResult<Value> {
        //! Retrieve the latest block.
        self.manager
            .request("/wallet/getnowblock", None, Method::Post)
            .await
    }

    pub async fn get_block(&self, block: Option<DefaultBlock>) -> AResult<Value> {
        //! Retrieve a block. Without `block`, the session default block
        //! is used, then the latest one.
        let block = block
            .or(self.session.default_block())
            .unwrap_or(DefaultBlock::Latest);
        let num = match block {
            DefaultBlock::Latest => return self.get_current_block().await,
            DefaultBlock::Earliest => 0,
            DefaultBlock::Number(num) => num,
        };
        self.manager
            .request(
                "/wallet/getblockbynum",
                Some(&json!({ "num": num })),
                Method::Post,
            )
            .await
    }

    pub async fn get_transaction(&self, tx_id: &str) -> AResult<Value> {
        //! Retrieve a transaction by ID.
        let response = self
            .manager
            .request(
                "/wallet/gettransactionbyid",
                Some(&json!({ "value": tx_id })),
                Method::Post,
            )
            .await?;
        if response.as_object().map_or(true, |o| o.is_empty()) {
            return Err(Box::new(TrxError::TransactionNotFound(tx_id.to_string())));
        }
        Ok(response)
    }

    pub fn sign(&self, mut transaction: Value) -> Result<Value, TrxError> {
        //! Sign a transaction with the session private key.
        //!
        //! The signature is `r || s || v` over `txID`, with `v = recid + 27`.
        let key = self.session.private_key().ok_or(TrxError::MissingPrivateKey)?;
        if let Some(error) = transaction.get("Error").and_then(Value::as_str) {
            return Err(TrxError::Rejected(error.to_string()));
        }
        let unsigned = UnsignedTransaction::deserialize(&transaction)
            .map_err(|e| TrxError::MalformedTransaction(e.to_string()))?;
        if !unsigned.signature.is_empty() {
            return Err(TrxError::AlreadySigned);
        }

        let key_address = key.address();
        if let Some(owner) = transaction
            .pointer("/raw_data/contract/0/parameter/value/owner_address")
            .and_then(Value::as_str)
        {
            if owner.parse::<Address>().ok() != Some(key_address) {
                return Err(TrxError::OwnerMismatch {
                    expected: key_address.to_hex(),
                    got: owner.to_string(),
                });
            }
        }

        let message = Message::from_slice(&unsigned.tx_id)
            .map_err(|e| TrxError::MalformedTransaction(e.to_string()))?;
        let (recovery_id, compact) = Secp256k1::signing_only()
            .sign_ecdsa_recoverable(&message, key)
            .serialize_compact();
        let mut signature = compact.to_vec();
        signature.push(recovery_id.to_i32() as u8 + 27);
        transaction["signature"] = json!([encode_hex(signature)]);
        Ok(transaction)
    }

    pub async fn send_raw_transaction(&self, signed: &Value) -> AResult<Value> {
        //! Broadcast a signed transaction.
        self.manager
            .request("/wallet/broadcasttransaction", Some(signed), Method::Post)
            .await
    }

    pub async fn send_trx(&self, to: &str, amount: f64) -> AResult<Value> {
        //! Transfer `amount` TRX from the session owner to `to`:
        //! build, sign and broadcast.
        let owner = self
            .session
            .owner_address()
            .ok_or(TransactionError::MissingOwner)?;
        let unsigned = TransactionBuilder::new(self.manager)
            .send_trx(to, amount, &owner.to_hex())
            .await?;
        let signed = self.sign(unsigned)?;
        self.send_raw_transaction(&signed).await
    }
}

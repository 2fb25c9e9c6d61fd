//! The `Tron` client: configuration, session state and node access in one place.

use std::collections::BTreeSet;

use reqwest::Url;
use serde_json::Value;

use crate::account::{Account, KeyError};
use crate::address::{Address, AddressValidationError};
use crate::network::{AResult, ConnectionStatus, HttpProvider, Method, NodeProvider, TronManager};
use crate::session::Session;
use crate::transaction_builder::TransactionBuilder;
use crate::transactions::TransactionError;
use crate::trx::Trx;
use crate::validation::{
    assert_event_name, assert_integer_in_range, assert_transaction_id, DefaultBlock,
    ValidationError, MAX_EVENT_PAGE_SIZE,
};

/// Optional API groups attached to a client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Module {
    /// Account, block and transaction calls, see [`Trx`].
    Trx,
}

/// Client configuration.
///
/// Every field has a default, see [`TronOptions::default`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TronOptions {
    /// Full node base URL
    pub full_node: Url,
    /// Solidity node base URL
    pub solidity_node: Url,
    /// Event server base URL
    pub event_server: Url,
    /// Private key used for signing, hex
    pub private_key: Option<String>,
    /// Default address, hex or base58
    pub default_address: Option<String>,
    /// Enabled modules
    pub modules: BTreeSet<Module>,
}

impl TronOptions {
    /// Public TronGrid endpoint (serves all three node APIs).
    pub const MAINNET_BASE_URL: &'static str = "https://api.trongrid.io/";
    /// Shasta testnet endpoint.
    pub const SHASTA_BASE_URL: &'static str = "https://api.shasta.trongrid.io/";

    pub fn mainnet() -> Self {
        //! Mainnet parameters
        Self::with_base_url(Self::MAINNET_BASE_URL.parse().expect("Preset URL"))
    }

    pub fn shasta() -> Self {
        //! Shasta testnet parameters
        Self::with_base_url(Self::SHASTA_BASE_URL.parse().expect("Preset URL"))
    }

    pub fn with_base_url(url: Url) -> Self {
        //! Use one host for all three nodes.
        Self {
            full_node: url.clone(),
            solidity_node: url.clone(),
            event_server: url,
            private_key: None,
            default_address: None,
            modules: BTreeSet::from([Module::Trx]),
        }
    }

    #[must_use]
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        //! Set a private key.
        self.private_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn default_address(mut self, address: impl Into<String>) -> Self {
        //! Set a default address.
        self.default_address = Some(address.into());
        self
    }

    #[must_use]
    pub fn modules<I: IntoIterator<Item = Module>>(mut self, modules: I) -> Self {
        //! Replace the set of enabled modules.
        self.modules = modules.into_iter().collect();
        self
    }
}

impl Default for TronOptions {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Client construction errors
#[derive(Debug)]
pub enum ConfigError {
    /// `private_key` option is malformed.
    InvalidPrivateKey(KeyError),
    /// `default_address` option is malformed.
    InvalidDefaultAddress(AddressValidationError),
    /// HTTP client could not be created.
    Http(reqwest::Error),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPrivateKey(e) => Some(e),
            Self::InvalidDefaultAddress(e) => Some(e),
            Self::Http(e) => Some(e),
        }
    }
}
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrivateKey(e) => write!(f, "Invalid private_key option: {e}"),
            Self::InvalidDefaultAddress(e) => write!(f, "Invalid default_address option: {e}"),
            Self::Http(e) => write!(f, "Cannot create HTTP client: {e}"),
        }
    }
}

/// Event server query.
#[derive(Clone, Debug, PartialEq)]
pub struct EventQuery {
    /// Contract emitting the events
    pub contract_address: String,
    /// Only events since this timestamp (ms)
    pub since: i64,
    /// Event name filter
    pub event_name: Option<String>,
    /// Block number filter, requires `event_name`
    pub block_number: Option<u64>,
    /// Page size, at most 200
    pub size: i64,
    /// Page number
    pub page: i64,
}

impl EventQuery {
    pub fn new(contract_address: impl Into<String>) -> Self {
        //! Query all events of a contract with default paging.
        Self {
            contract_address: contract_address.into(),
            since: 0,
            event_name: None,
            block_number: None,
            size: 20,
            page: 1,
        }
    }

    pub fn to_path(&self) -> AResult<String> {
        //! Validate the query and render the event server path.
        let contract: Address = self.contract_address.parse()?;
        if self.block_number.is_some() && self.event_name.is_none() {
            return Err(Box::new(ValidationError::UnsupportedFilter(
                "Usage of block number filtering requires an event name",
            )));
        }
        if let Some(name) = &self.event_name {
            assert_event_name(name)?;
        }
        let since = assert_integer_in_range("since", self.since, None)?;
        let size = assert_integer_in_range("size", self.size, Some(MAX_EVENT_PAGE_SIZE))?;
        let page = assert_integer_in_range("page", self.page, None)?;

        let mut route = vec![contract.to_base58()];
        route.extend(self.event_name.clone());
        route.extend(self.block_number.map(|n| n.to_string()));
        Ok(format!(
            "/event/contract/{}?since={since}&size={size}&page={page}",
            route.join("/")
        ))
    }
}

/// TRON network client.
#[derive(Clone, Debug)]
pub struct Tron<P: NodeProvider = HttpProvider> {
    manager: TronManager<P>,
    session: Session,
    modules: BTreeSet<Module>,
}

impl Tron<HttpProvider> {
    pub fn new(options: TronOptions) -> Result<Self, ConfigError> {
        //! Connect to the nodes given in `options` over HTTP.
        let provider = |url: &Url| HttpProvider::new(url.clone()).map_err(ConfigError::Http);
        let full = provider(&options.full_node)?;
        let solidity = provider(&options.solidity_node)?;
        let event = provider(&options.event_server)?;
        Self::with_providers(full, solidity, event, options)
    }
}

impl<P: NodeProvider> Tron<P> {
    pub fn with_providers(
        full_node: P,
        solidity_node: P,
        event_server: P,
        options: TronOptions,
    ) -> Result<Self, ConfigError> {
        //! Create a client over custom providers. Node URLs from
        //! `options` are ignored, the other options apply.
        let mut session = Session::new();
        if let Some(key) = &options.private_key {
            session
                .set_private_key(key)
                .map_err(ConfigError::InvalidPrivateKey)?;
        }
        if let Some(address) = &options.default_address {
            session
                .set_default_address(address)
                .map_err(ConfigError::InvalidDefaultAddress)?;
        }
        Ok(Self {
            manager: TronManager::new(full_node, solidity_node, event_server),
            session,
            modules: options.modules,
        })
    }

    pub const fn manager(&self) -> &TronManager<P> {
        //! Node manager.
        &self.manager
    }

    pub const fn providers(&self) -> (&P, &P, &P) {
        //! Full node, solidity node and event server providers.
        (
            self.manager.full_node(),
            self.manager.solidity_node(),
            self.manager.event_server(),
        )
    }

    pub const fn session(&self) -> &Session {
        //! Session state.
        &self.session
    }

    pub fn set_private_key(&mut self, key: &str) -> Result<(), KeyError> {
        //! See [`Session::set_private_key`].
        self.session.set_private_key(key)
    }

    pub fn set_default_address(&mut self, address: &str) -> Result<(), AddressValidationError> {
        //! See [`Session::set_default_address`].
        self.session.set_default_address(address)
    }

    pub fn set_default_block<B>(&mut self, block: B) -> Result<(), ValidationError>
    where
        B: TryInto<DefaultBlock, Error = ValidationError>,
    {
        //! See [`Session::set_default_block`].
        self.session.set_default_block(block)
    }

    pub fn create_account(&self) -> Account {
        //! Generate a new account locally. Nothing is sent to the network;
        //! the account appears on chain with its first incoming transfer.
        Account::generate()
    }

    pub fn trx(&self) -> Option<Trx<'_, P>> {
        //! Account, block and transaction calls.
        //!
        //! Returns [`None`] if [`Module::Trx`] is not enabled.
        self.modules
            .contains(&Module::Trx)
            .then(|| Trx::new(&self.manager, &self.session))
    }

    pub const fn transaction_builder(&self) -> TransactionBuilder<'_, P> {
        //! Builder bound to this client's full node.
        TransactionBuilder::new(&self.manager)
    }

    pub async fn send_trx(&self, to: &str, amount: f64, from: Option<&str>) -> AResult<Value> {
        //! Create an unsigned transfer. Without `from`, the default
        //! address (or the private key's address) is the sender.
        let owner = match from {
            Some(from) => from.to_string(),
            None => self
                .session
                .owner_address()
                .ok_or(TransactionError::MissingOwner)?
                .to_hex(),
        };
        self.transaction_builder().send_trx(to, amount, &owner).await
    }

    pub async fn get_event_result(&self, query: &EventQuery) -> AResult<Value> {
        //! Retrieve events matching the query from the event server.
        let path = query.to_path()?;
        self.manager.request(&path, None, Method::Get).await
    }

    pub async fn get_event_transaction_id(&self, tx_id: &str) -> AResult<Value> {
        //! Retrieve all events emitted by a transaction.
        assert_transaction_id(tx_id)?;
        self.manager
            .request(&format!("/event/transaction/{tx_id}"), None, Method::Get)
            .await
    }

    pub async fn is_connected(&self) -> ConnectionStatus {
        //! Check which nodes are reachable.
        self.manager.is_connected().await
    }
}

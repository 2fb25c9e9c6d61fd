//! Module for interacting with node HTTP APIs.
//!
//! A TRON deployment exposes three HTTP surfaces: the full node
//! (`/wallet/*`), the solidity node serving confirmed state
//! (`/walletsolidity/*`) and the event server (`/event/*`).
//! [`TronManager`] routes every request to the right one.

use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// Generic result of all asynchronous calls in this module.
pub type AResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP method of a node request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    /// `GET`, params are sent as a query string
    Get,
    /// `POST`, params are sent as a JSON body
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Transport used to reach a single node.
///
/// [`HttpProvider`] is the production implementation; anything else
/// (a mock, a proxy) can be plugged into [`TronManager`].
#[allow(async_fn_in_trait)]
pub trait NodeProvider {
    /// Base URL all paths are resolved against.
    fn base_url(&self) -> &Url;

    /// Perform a request and return the decoded JSON response.
    async fn request(&self, path: &str, params: Option<&Value>, method: Method)
        -> AResult<Value>;
}

/// A simple HTTP REST client for a TRON node.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    /// API base url
    pub base_url: Url,
    client: Client,
}

impl HttpProvider {
    /// Request timeout used by [`HttpProvider::new`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: Url) -> reqwest::Result<Self> {
        //! Create a provider with the default timeout.
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        //! Create a provider with a custom request timeout.
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub const fn with_client(base_url: Url, client: Client) -> Self {
        //! Create a provider reusing a preconfigured [`Client`].
        Self { base_url, client }
    }
}

impl NodeProvider for HttpProvider {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn request(
        &self,
        path: &str,
        params: Option<&Value>,
        method: Method,
    ) -> AResult<Value> {
        tracing::debug!(%method, base_url = %self.base_url, path, "node request");
        let url = self.base_url.join(path)?;
        let builder = match method {
            Method::Get => {
                let builder = self.client.get(url);
                match params {
                    Some(params) => builder.query(params),
                    None => builder,
                }
            }
            Method::Post => self
                .client
                .post(url)
                .json(params.unwrap_or(&Value::Object(Default::default()))),
        };
        let response = builder.send().await?.error_for_status()?.text().await?;
        if response.trim().is_empty() {
            Ok(Value::Object(Default::default()))
        } else {
            Ok(serde_json::from_str(&response)?)
        }
    }
}

/// Node an API path is served by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// `/wallet/*` and anything unrecognized
    FullNode,
    /// `/walletsolidity/*`
    SolidityNode,
    /// `/event/*` and `/healthcheck`
    EventServer,
}

impl NodeKind {
    pub fn for_path(path: &str) -> Self {
        //! Pick the node that serves `path`.
        if path.starts_with("/walletsolidity") {
            Self::SolidityNode
        } else if path.starts_with("/event") || path.starts_with("/healthcheck") {
            Self::EventServer
        } else {
            Self::FullNode
        }
    }
}

/// Reachability of each configured node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConnectionStatus {
    /// Full node answered
    pub full_node: bool,
    /// Solidity node answered
    pub solidity_node: bool,
    /// Event server answered
    pub event_server: bool,
}

impl ConnectionStatus {
    pub const fn all(&self) -> bool {
        //! Whether every node is reachable.
        self.full_node && self.solidity_node && self.event_server
    }
}

/// Routes requests between the three configured nodes.
#[derive(Clone, Debug)]
pub struct TronManager<P: NodeProvider = HttpProvider> {
    full_node: P,
    solidity_node: P,
    event_server: P,
}

impl<P: NodeProvider> TronManager<P> {
    pub const fn new(full_node: P, solidity_node: P, event_server: P) -> Self {
        //! Create a manager over three providers.
        Self {
            full_node,
            solidity_node,
            event_server,
        }
    }

    pub const fn full_node(&self) -> &P {
        //! Full node provider.
        &self.full_node
    }
    pub const fn solidity_node(&self) -> &P {
        //! Solidity node provider.
        &self.solidity_node
    }
    pub const fn event_server(&self) -> &P {
        //! Event server provider.
        &self.event_server
    }

    pub const fn provider(&self, kind: NodeKind) -> &P {
        //! Provider for a node kind.
        match kind {
            NodeKind::FullNode => &self.full_node,
            NodeKind::SolidityNode => &self.solidity_node,
            NodeKind::EventServer => &self.event_server,
        }
    }

    pub async fn request(
        &self,
        path: &str,
        params: Option<&Value>,
        method: Method,
    ) -> AResult<Value> {
        //! Send a request to the node serving `path`.
        self.provider(NodeKind::for_path(path))
            .request(path, params, method)
            .await
    }

    pub async fn is_connected(&self) -> ConnectionStatus {
        //! Probe every node. Any failure (transport or decoding)
        //! marks the node as unreachable.
        let full_node = self
            .full_node
            .request("/wallet/getnowblock", None, Method::Post)
            .await
            .is_ok_and(|block| block.get("blockID").is_some());
        let solidity_node = self
            .solidity_node
            .request("/walletsolidity/getnowblock", None, Method::Post)
            .await
            .is_ok_and(|block| block.get("blockID").is_some());
        let event_server = self
            .event_server
            .request("/healthcheck", None, Method::Get)
            .await
            .is_ok();
        ConnectionStatus {
            full_node,
            solidity_node,
            event_server,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_routing() {
        assert_eq!(
            NodeKind::for_path("/wallet/createtransaction"),
            NodeKind::FullNode
        );
        assert_eq!(
            NodeKind::for_path("/walletsolidity/getnowblock"),
            NodeKind::SolidityNode
        );
        assert_eq!(
            NodeKind::for_path("/event/transaction/abc"),
            NodeKind::EventServer
        );
        assert_eq!(NodeKind::for_path("/healthcheck"), NodeKind::EventServer);
        assert_eq!(NodeKind::for_path("/anything"), NodeKind::FullNode);
    }

    #[test]
    fn test_http_provider_joins_url() {
        let provider = HttpProvider::new("https://api.trongrid.io".parse().unwrap()).unwrap();
        assert_eq!(
            provider
                .base_url()
                .join("/event/contract/x?since=0")
                .unwrap()
                .as_str(),
            "https://api.trongrid.io/event/contract/x?since=0"
        );
    }
}

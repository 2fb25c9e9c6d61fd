#![allow(dead_code)]

use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tron_devkit::client::{Tron, TronOptions};
use tron_devkit::network::{AResult, Method, NodeProvider};

/// A request seen by [`MockProvider`].
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub node: &'static str,
    pub path: String,
    pub params: Option<Value>,
    pub method: Method,
}

/// In-memory node answering from a path -> response table.
#[derive(Clone, Debug)]
pub struct MockProvider {
    node: &'static str,
    base_url: Url,
    calls: Arc<Mutex<Vec<Call>>>,
    responses: Arc<HashMap<String, Value>>,
}

impl NodeProvider for MockProvider {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn request(&self, path: &str, params: Option<&Value>, method: Method) -> AResult<Value> {
        self.calls.lock().unwrap().push(Call {
            node: self.node,
            path: path.to_string(),
            params: params.cloned(),
            method,
        });
        let route = path.split('?').next().unwrap_or(path);
        match self.responses.get(route) {
            Some(response) => Ok(response.clone()),
            None => Err(format!("connection refused: {route}").into()),
        }
    }
}

pub type Calls = Arc<Mutex<Vec<Call>>>;

pub fn mock_tron(options: TronOptions, responses: &[(&str, Value)]) -> (Tron<MockProvider>, Calls) {
    let calls: Calls = Arc::default();
    let responses: Arc<HashMap<String, Value>> = Arc::new(
        responses
            .iter()
            .map(|(path, value)| (path.to_string(), value.clone()))
            .collect(),
    );
    let provider = |node: &'static str| MockProvider {
        node,
        base_url: format!("http://{node}.local/").parse().unwrap(),
        calls: calls.clone(),
        responses: responses.clone(),
    };
    let tron = Tron::with_providers(
        provider("full"),
        provider("solidity"),
        provider("event"),
        options,
    )
    .expect("Valid options");
    (tron, calls)
}

pub fn recorded(calls: &Calls) -> Vec<Call> {
    calls.lock().unwrap().clone()
}

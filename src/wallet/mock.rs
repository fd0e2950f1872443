use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;

use super::provider::{ProviderError, WalletProvider};

/// Scripted wallet for tests: each method answers from its own queue and
/// every call is recorded.
#[derive(Default)]
pub struct MockWallet {
    responses: Mutex<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wallet on `chain_id` with one account that accepts `wallet_sendCalls`.
    pub fn happy(chain_id: &str) -> Self {
        Self::new()
            .respond("eth_requestAccounts", Ok(serde_json::json!(["0x1111111111111111111111111111111111111111"])))
            .respond("eth_chainId", Ok(Value::String(chain_id.to_string())))
            .respond("wallet_sendCalls", Ok(serde_json::json!({ "id": "0xbundle" })))
    }

    pub fn respond(self, method: &str, response: Result<Value, ProviderError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(method, _)| method).collect()
    }

    pub fn params_of(&self, method: &str) -> Option<Value> {
        self.calls()
            .into_iter()
            .find(|(m, _)| m == method)
            .map(|(_, params)| params)
    }
}

#[async_trait::async_trait]
impl WalletProvider for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.lock().unwrap().push((method.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(ProviderError::new(Some(4200), format!("Unsupported method: {method}"))))
    }

    fn name(&self) -> String {
        "mock".to_string()
    }
}

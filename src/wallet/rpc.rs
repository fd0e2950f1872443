use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::provider::{ProviderError, WalletProvider};

fn rpc_request(id: u64, method: &str, params: Value) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    })
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ProviderError>,
}

/// Wallet reached through a JSON-RPC 2.0 endpoint (an EIP-1193 bridge such
/// as a local signer or a companion wallet app).
pub struct RpcWallet {
    rpc_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
    next_id: AtomicU64,
}

impl RpcWallet {
    pub fn new(rpc_url: String, timeout: Option<Duration>) -> Self {
        Self {
            rpc_url,
            client: reqwest::Client::new(),
            timeout,
            next_id: AtomicU64::new(1),
        }
    }

    async fn post(&self, body: &Value) -> Result<RpcResponse, ProviderError> {
        let mut request = self.client.post(&self.rpc_url).json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        response
            .json::<RpcResponse>()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))
    }
}

#[async_trait::async_trait]
impl WalletProvider for RpcWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, method, "wallet request");

        let response = self.post(&rpc_request(id, method, params)).await?;
        if let Some(error) = response.error {
            debug!(id, method, code = ?error.code, "wallet request failed");
            return Err(error);
        }
        Ok(response.result.unwrap_or(Value::Null))
    }

    /// Host (and port) only; hosted endpoints carry their API key in the path.
    fn name(&self) -> String {
        reqwest::Url::parse(&self.rpc_url)
            .ok()
            .and_then(|url| {
                let host = url.host_str()?.to_string();
                Some(match url.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host,
                })
            })
            .unwrap_or_else(|| "wallet".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_json_rpc_envelope() {
        let body = rpc_request(7, "eth_chainId", serde_json::json!([]));
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], 7);
        assert_eq!(body["method"], "eth_chainId");
        assert!(body["params"].as_array().unwrap().is_empty());
    }

    #[test]
    fn parses_error_response() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, Some(4001));
    }

    #[test]
    fn parses_result_response() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"result":"0x2105"}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.result, Some(Value::String("0x2105".into())));
        assert!(response.error.is_none());
    }

    #[test]
    fn name_hides_path_and_query() {
        let hosted = RpcWallet::new("https://base-mainnet.example.com/v2/s3cr3tk3y?x=1".to_string(), None);
        assert_eq!(hosted.name(), "base-mainnet.example.com");

        let local = RpcWallet::new("http://127.0.0.1:8545/".to_string(), None);
        assert_eq!(local.name(), "127.0.0.1:8545");

        let garbage = RpcWallet::new("not a url".to_string(), None);
        assert_eq!(garbage.name(), "wallet");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let wallet = RpcWallet::new(
            "http://127.0.0.1:9/".to_string(),
            Some(Duration::from_millis(500)),
        );
        let err = wallet
            .request("eth_chainId", serde_json::json!([]))
            .await
            .expect_err("nothing listens on the discard port");
        assert_eq!(err.code, None);
    }
}

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::USER_REJECTED_CODE;
use crate::error::TipError;

/// Raw failure reported by a wallet, in EIP-1193 `{ code, message }` shape.
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("{message}")]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn is_user_rejection(&self) -> bool {
        if self.code == Some(USER_REJECTED_CODE) {
            return true;
        }
        let lower = self.message.to_lowercase();
        lower.contains("rejected") || lower.contains("denied")
    }

    /// Maps an opaque wallet failure onto the tip error taxonomy.
    pub fn into_tip_error(self) -> TipError {
        if self.is_user_rejection() {
            TipError::UserRejected
        } else {
            TipError::Provider(self.message)
        }
    }
}

/// EIP-1193 style request capability of a connected wallet.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Short label for the status bar.
    fn name(&self) -> String {
        "wallet".to_string()
    }
}

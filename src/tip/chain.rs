use std::fmt;

use serde_json::Value;
use tracing::{info, warn};

use crate::constants::{BASE_MAINNET, BASE_SEPOLIA};
use crate::error::TipError;
use crate::wallet::WalletProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAIN: ChainId = ChainId(BASE_MAINNET);
    pub const TEST: ChainId = ChainId(BASE_SEPOLIA);

    pub fn parse(raw: &str) -> Option<ChainId> {
        let raw = raw.trim();
        match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok().map(ChainId),
            None => raw.parse().ok().map(ChainId),
        }
    }

    pub fn is_accepted(&self) -> bool {
        *self == Self::MAIN || *self == Self::TEST
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::MAIN => "Base",
            Self::TEST => "Base Sepolia",
            _ => "unsupported",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Keeps an accepted chain as is; otherwise asks the wallet to move to Base.
pub async fn ensure_network(
    provider: &dyn WalletProvider,
    current: Option<ChainId>,
) -> Result<ChainId, TipError> {
    if let Some(chain) = current.filter(ChainId::is_accepted) {
        return Ok(chain);
    }

    info!(current = ?current.map(|c| c.to_string()), "requesting switch to {}", ChainId::MAIN);
    let params = serde_json::json!([{ "chainId": ChainId::MAIN.to_string() }]);
    match provider.request("wallet_switchEthereumChain", params).await {
        Ok(_) => Ok(ChainId::MAIN),
        Err(e) => {
            warn!(code = ?e.code, "network switch failed: {}", e.message);
            Err(TipError::NetworkSwitchRejected)
        }
    }
}

/// Reads the wallet's chain and runs [`ensure_network`] on it.
pub async fn ensure_base_chain(provider: &dyn WalletProvider) -> Result<ChainId, TipError> {
    let raw = provider
        .request("eth_chainId", Value::Array(Vec::new()))
        .await
        .map_err(|e| e.into_tip_error())?;
    let current = raw.as_str().and_then(ChainId::parse);
    ensure_network(provider, current).await
}

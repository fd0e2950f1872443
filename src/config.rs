use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::constants::{
    DEFAULT_BUILDER_CODE, DEFAULT_RECIPIENT, HOST_DETECT_TIMEOUT_MILLIS, PREPARE_DELAY_MILLIS,
    SENDING_DELAY_MILLIS, USDC_BASE,
};
use crate::tip::encode::normalize_address;

/// Settings of the tip flow.
#[derive(Debug, Clone)]
pub struct TipConfig {
    pub recipient: String,
    pub builder_code: String,
    pub token_address: String,
    pub prepare_delay: Duration,
    pub sending_delay: Duration,
}

impl TipConfig {
    /// Tipping stays disabled until both a recipient and a builder code exist.
    pub fn is_enabled(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.builder_code.trim().is_empty()
    }
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            builder_code: DEFAULT_BUILDER_CODE.to_string(),
            token_address: USDC_BASE.to_string(),
            prepare_delay: Duration::from_millis(PREPARE_DELAY_MILLIS),
            sending_delay: Duration::from_millis(SENDING_DELAY_MILLIS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub wallet_rpc_url: Option<String>,
    pub wallet_timeout: Option<Duration>,
    pub data_dir: PathBuf,
    pub host_timeout: Duration,
    pub log_filter: String,
    pub tip: TipConfig,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn millis(name: &str, default: u64) -> Result<Duration> {
    match var(name) {
        Some(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{name} must be a number of milliseconds, got '{raw}'"))?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(Duration::from_millis(default)),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = match var("INKWELL_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| anyhow!("Failed to get data directory"))?
                .join("inkwell"),
        };

        let wallet_timeout = match var("INKWELL_WALLET_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("INKWELL_WALLET_TIMEOUT_SECS must be whole seconds, got '{raw}'"))?,
            )),
            None => None,
        };

        // An explicitly empty value disables tipping instead of falling back.
        let recipient = env::var("INKWELL_RECIPIENT").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string());
        let builder_code = env::var("INKWELL_BUILDER_CODE").unwrap_or_else(|_| DEFAULT_BUILDER_CODE.to_string());

        Ok(Config {
            wallet_rpc_url: var("INKWELL_WALLET_RPC"),
            wallet_timeout,
            data_dir,
            host_timeout: millis("INKWELL_HOST_TIMEOUT_MS", HOST_DETECT_TIMEOUT_MILLIS)?,
            log_filter: var("RUST_LOG").unwrap_or_else(|| "inkwell=info".to_string()),
            tip: TipConfig {
                recipient,
                builder_code,
                token_address: var("INKWELL_TOKEN_ADDRESS").unwrap_or_else(|| USDC_BASE.to_string()),
                prepare_delay: millis("INKWELL_PREPARE_MS", PREPARE_DELAY_MILLIS)?,
                sending_delay: millis("INKWELL_SENDING_MS", SENDING_DELAY_MILLIS)?,
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        normalize_address(&self.tip.token_address)
            .map_err(|_| anyhow!("Invalid token address: {}", self.tip.token_address))?;
        if let Some(url) = &self.wallet_rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("INKWELL_WALLET_RPC must be an http(s) URL, got '{url}'"));
            }
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::constants::MAX_ERROR_MESSAGE_CHARS;

/// Rejections produced while parsing a tip amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Enter an amount.")]
    EmptyInput,

    #[error("Invalid amount format (max 6 decimals).")]
    InvalidFormat,

    #[error("Amount must be > 0.")]
    NonPositiveAmount,

    #[error("Amount too large.")]
    AmountTooLarge,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TipError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error("Bad recipient address.")]
    InvalidAddress(String),

    #[error("No EVM wallet found in this environment.")]
    NoWalletFound,

    #[error("No account available.")]
    NoAccount,

    #[error("Please switch to Base in your wallet to send USDC.")]
    NetworkSwitchRejected,

    #[error("No worries—tip canceled.")]
    UserRejected,

    #[error("{0}")]
    Provider(String),

    #[error("Tip sending disabled until a recipient and builder code are configured.")]
    NotConfigured,

    #[error("Invalid tip transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
}

impl TipError {
    /// Text shown in the toast for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            return "Something went wrong.".to_string();
        }
        truncate_chars(&message, MAX_ERROR_MESSAGE_CHARS)
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Write or paste a snippet first.")]
    EmptyClip,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

use ethereum_types::U256;

use crate::constants::TRANSFER_SELECTOR;
use crate::error::TipError;

fn pad32(hex_no_prefix: &str) -> String {
    format!("{:0>64}", hex_no_prefix)
}

/// Normalizes a 20-byte EVM address to 40 lowercase hex chars without `0x`.
pub fn normalize_address(address: &str) -> Result<String, TipError> {
    let lower = address.trim().to_lowercase();
    let stripped = lower.strip_prefix("0x").unwrap_or(&lower);
    if stripped.len() != 40 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TipError::InvalidAddress(address.to_string()));
    }
    Ok(stripped.to_string())
}

/// Builds call data for ERC-20 `transfer(address,uint256)`.
///
/// Layout: `0x` + selector `a9059cbb` + address word + amount word, each
/// word left-padded with zeros to 32 bytes. Always 138 characters.
pub fn encode_transfer(recipient: &str, amount_units: U256) -> Result<String, TipError> {
    let addr = normalize_address(recipient)?;
    let amount = format!("{:x}", amount_units);
    Ok(format!(
        "0x{}{}{}",
        TRANSFER_SELECTOR,
        pad32(&addr),
        pad32(&amount)
    ))
}

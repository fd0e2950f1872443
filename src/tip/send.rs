use ethereum_types::U256;
use serde_json::Value;
use tracing::info;

use super::attribution::AttributionEncoder;
use super::chain::{ensure_base_chain, ChainId};
use super::encode::encode_transfer;
use crate::config::TipConfig;
use crate::constants::WALLET_CALLS_VERSION;
use crate::error::TipError;
use crate::wallet::WalletProvider;

fn send_calls_params(from: &str, chain: ChainId, token: &str, data: &str, data_suffix: &str) -> Value {
    serde_json::json!([{
        "version": WALLET_CALLS_VERSION,
        "from": from,
        "chainId": chain.to_string(),
        "atomicRequired": true,
        "calls": [{ "to": token, "value": "0x0", "data": data }],
        "capabilities": { "dataSuffix": data_suffix },
    }])
}

/// Sends `amount_units` of USDC to the configured recipient as a single
/// `wallet_sendCalls` bundle and returns the wallet's answer.
pub async fn send_usdc(
    provider: Option<&dyn WalletProvider>,
    attribution: &dyn AttributionEncoder,
    config: &TipConfig,
    amount_units: U256,
) -> Result<Value, TipError> {
    let provider = provider.ok_or(TipError::NoWalletFound)?;

    let accounts = provider
        .request("eth_requestAccounts", Value::Array(Vec::new()))
        .await
        .map_err(|e| e.into_tip_error())?;
    let from = accounts
        .as_array()
        .and_then(|list| list.first())
        .and_then(Value::as_str)
        .ok_or(TipError::NoAccount)?
        .to_string();

    let chain = ensure_base_chain(provider).await?;
    let data = encode_transfer(&config.recipient, amount_units)?;
    let data_suffix = attribution.data_suffix(&[config.builder_code.as_str()])?;

    info!(%from, %chain, network = chain.label(), units = %amount_units, "submitting tip");
    let params = send_calls_params(&from, chain, &config.token_address, &data, &data_suffix);
    provider
        .request("wallet_sendCalls", params)
        .await
        .map_err(|e| e.into_tip_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tip::attribution::Erc8021;
    use crate::wallet::mock::MockWallet;
    use crate::wallet::ProviderError;

    fn units(n: u64) -> U256 {
        U256::from(n)
    }

    #[tokio::test]
    async fn missing_provider_is_no_wallet() {
        let err = send_usdc(None, &Erc8021, &TipConfig::default(), units(1)).await.unwrap_err();
        assert_eq!(err, TipError::NoWalletFound);
    }

    #[tokio::test]
    async fn builds_send_calls_bundle() {
        let wallet = MockWallet::happy("0x14a34");
        let config = TipConfig::default();
        send_usdc(Some(&wallet), &Erc8021, &config, units(1_500_000)).await.unwrap();

        assert_eq!(wallet.methods(), vec!["eth_requestAccounts", "eth_chainId", "wallet_sendCalls"]);

        let params = wallet.params_of("wallet_sendCalls").unwrap();
        let bundle = &params[0];
        assert_eq!(bundle["version"], "2.0.0");
        assert_eq!(bundle["from"], "0x1111111111111111111111111111111111111111");
        assert_eq!(bundle["chainId"], "0x14a34");
        assert_eq!(bundle["atomicRequired"], true);

        let call = &bundle["calls"][0];
        assert_eq!(call["to"], config.token_address.as_str());
        assert_eq!(call["value"], "0x0");
        let expected = encode_transfer(&config.recipient, units(1_500_000)).unwrap();
        assert_eq!(call["data"], expected.as_str());

        let suffix = Erc8021.data_suffix(&[config.builder_code.as_str()]).unwrap();
        assert_eq!(bundle["capabilities"]["dataSuffix"], suffix.as_str());
    }

    #[tokio::test]
    async fn empty_account_list_fails() {
        let wallet = MockWallet::new().respond("eth_requestAccounts", Ok(serde_json::json!([])));
        let err = send_usdc(Some(&wallet), &Erc8021, &TipConfig::default(), units(1)).await.unwrap_err();
        assert_eq!(err, TipError::NoAccount);
    }

    #[tokio::test]
    async fn rejected_send_is_user_rejection() {
        let wallet = MockWallet::new()
            .respond("eth_requestAccounts", Ok(serde_json::json!(["0xabc"])))
            .respond("eth_chainId", Ok(Value::String("0x2105".into())))
            .respond("wallet_sendCalls", Err(ProviderError::new(Some(4001), "User rejected")));
        let err = send_usdc(Some(&wallet), &Erc8021, &TipConfig::default(), units(1)).await.unwrap_err();
        assert_eq!(err, TipError::UserRejected);
    }

    #[tokio::test]
    async fn bad_recipient_aborts_before_submit() {
        let wallet = MockWallet::happy("0x2105");
        let config = TipConfig {
            recipient: "0x1234".to_string(),
            ..TipConfig::default()
        };
        let err = send_usdc(Some(&wallet), &Erc8021, &config, units(1)).await.unwrap_err();
        assert!(matches!(err, TipError::InvalidAddress(_)));
        assert!(!wallet.methods().contains(&"wallet_sendCalls".to_string()));
    }

    #[tokio::test]
    async fn wrong_chain_without_switch_aborts() {
        let wallet = MockWallet::new()
            .respond("eth_requestAccounts", Ok(serde_json::json!(["0xabc"])))
            .respond("eth_chainId", Ok(Value::String("0x1".into())))
            .respond("wallet_switchEthereumChain", Err(ProviderError::new(Some(4001), "User rejected")));
        let err = send_usdc(Some(&wallet), &Erc8021, &TipConfig::default(), units(1)).await.unwrap_err();
        assert_eq!(err, TipError::NetworkSwitchRejected);
    }
}

mod provider;
mod rpc;
#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use provider::ProviderError;
pub use provider::WalletProvider;
pub use rpc::RpcWallet;

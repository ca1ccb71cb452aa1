use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Wallet address not found: {0}")]
    WalletNotFound(String),
}

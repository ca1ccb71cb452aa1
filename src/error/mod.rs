pub mod analytics;
pub mod chart;
pub mod config;
pub mod engine;
pub mod loader;

pub use analytics::AnalyticsError;
pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use chart::ChartError;
pub use config::ConfigError;
pub use engine::EngineError;
pub use loader::LoaderError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        anyhow::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}

/// Walks the anyhow chain looking for a wallet lookup miss.
pub fn is_wallet_not_found(err: &Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<AnalyticsError>(), Some(AnalyticsError::WalletNotFound(_))))
}

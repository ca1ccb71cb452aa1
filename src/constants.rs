/// ======================= Dataset columns =======================
/// Etherscan CSV export header names
pub const DEFAULT_FROM_COLUMN: &str = "From";
pub const DEFAULT_TO_COLUMN: &str = "To";
pub const DEFAULT_VALUE_COLUMN: &str = "Value_OUT(ETH)";
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "DateTime (UTC)";

/// ======================= Analytics =======================
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;
pub const DEFAULT_TOP_COUNTERPARTIES: usize = 5;

/// ======================= Chart =======================
pub const CHART_TITLE: &str = "TRANSACTION VOLUME OVER TIME";
pub const CHART_X_LABEL: &str = "DATE";
pub const CHART_Y_LABEL: &str = "ETH VOLUME";
pub const CHART_SERIES_LABEL: &str = "DAILY TRANSACTION VOLUME";

/// ======================= Http =======================
pub const WALLET_NOT_FOUND_MESSAGE: &str = "Wallet address not found";

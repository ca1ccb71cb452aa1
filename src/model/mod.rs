pub mod address;
pub mod analytics;
pub mod graph;
pub mod transfer;
pub mod trend;

pub use address::WalletAddress;
pub use analytics::Counterparty;
pub use analytics::WalletAnalytics;
pub use graph::AddressNode;
pub use graph::TransactionGraph;
pub use graph::TransferEdge;
pub use transfer::TransactionTable;
pub use transfer::TransferRecord;
pub use trend::TrendPoint;
pub use trend::TrendSeries;

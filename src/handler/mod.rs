pub mod http;
pub mod query;

pub use query::QueryHandler;
pub use query::WalletReport;

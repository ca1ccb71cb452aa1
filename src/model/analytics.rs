use serde::Deserialize;
use serde::Serialize;

use super::WalletAddress;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub counterparty: WalletAddress,
    pub total_value: f64,
}

/// Per-query analytics for one wallet. Every aggregate resolves to 0 when
/// its input set is empty; nothing here is ever NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAnalytics {
    pub num_outgoing: usize,
    pub num_incoming: usize,
    pub avg_outgoing_value: f64,
    pub avg_incoming_value: f64,
    pub largest_transaction: f64,
    pub degree_centrality: f64,
    pub betweenness_centrality: f64,
    pub pagerank: f64,
    pub top_counterparties: Vec<Counterparty>,
}

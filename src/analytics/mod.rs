pub mod cache;
pub mod centrality;
pub mod trend;
pub mod wallet;

pub use cache::CentralityCache;
pub use centrality::CentralityScores;
pub use centrality::PageRankParams;
pub use centrality::betweenness_centrality;
pub use centrality::degree_centrality;
pub use centrality::pagerank;
pub use trend::trend;
pub use wallet::analyze;
pub use wallet::analyze_with_scores;
pub use wallet::top_counterparties;

pub mod loader;

use std::sync::Arc;

use tracing::info;
use tracing::instrument;

use crate::Result;
use crate::analytics::CentralityCache;
use crate::analytics::CentralityScores;
use crate::analytics::PageRankParams;
use crate::analytics::wallet::analyze_with_scores;
use crate::config::AnalyticsConfig;
use crate::config::Config;
use crate::model::TransactionGraph;
use crate::model::TransactionTable;
use crate::model::TrendSeries;
use crate::model::WalletAddress;
use crate::model::WalletAnalytics;
pub use self::loader::LoadReport;

/// Read-only state shared by every query: the cleaned table, the graph folded
/// from it, and (optionally) memoized centrality. Built once at startup.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub table:       Arc<TransactionTable>,
    pub graph:       Arc<TransactionGraph>,
    pub centrality:  Option<Arc<CentralityCache>>,
    pub fingerprint: u64,
}

impl Ledger {
    pub fn new(
        table: TransactionTable,
        cache_centrality: bool,
    ) -> Self {
        let graph = TransactionGraph::from_table(&table);
        let fingerprint = graph.fingerprint();
        Self {
            table: Arc::new(table),
            graph: Arc::new(graph),
            centrality: cache_centrality.then(|| Arc::new(CentralityCache::new())),
            fingerprint,
        }
    }

    /// Folds the table again. The shared graph is never mutated in place.
    pub fn rebuild_graph(&self) -> TransactionGraph { TransactionGraph::from_table(&self.table) }

    pub fn contains(
        &self,
        wallet: &WalletAddress,
    ) -> bool {
        self.graph.contains(wallet)
    }

    pub fn centrality_scores(
        &self,
        params: &PageRankParams,
    ) -> Arc<CentralityScores> {
        match &self.centrality {
            Some(cache) => cache.get_or_compute(&self.graph, self.fingerprint, params),
            None => Arc::new(CentralityScores::compute(&self.graph, params)),
        }
    }

    pub fn analyze(
        &self,
        wallet: &WalletAddress,
        config: &AnalyticsConfig,
    ) -> Result<WalletAnalytics> {
        if !self.contains(wallet) {
            // Skip the centrality pass for unknown wallets
            return analyze_with_scores(wallet, &self.table, &self.graph, &CentralityScores::default(), 0);
        }
        let scores = self.centrality_scores(&PageRankParams::from(config));
        analyze_with_scores(wallet, &self.table, &self.graph, &scores, config.top_counterparties)
    }

    pub fn trend(
        &self,
        wallet: &WalletAddress,
    ) -> Option<TrendSeries> {
        crate::analytics::trend(wallet, &self.table)
    }
}

#[instrument(level = "info", skip(config))]
pub fn make_ledger(
    engine_name: &str,
    config: &Config,
) -> Result<Ledger> {
    let (table, report) = self::loader::load_table(&config.dataset)?;
    info!("{}::table::created::kept::{}::dropped::{}", engine_name, report.kept_rows, report.dropped_rows);

    let ledger = Ledger::new(table, config.analytics.cache_centrality);
    info!(
        "{}::graph::created::nodes::{}::edges::{}::fingerprint::{:x}",
        engine_name,
        ledger.graph.node_count(),
        ledger.graph.edge_count(),
        ledger.fingerprint
    );

    Ok(ledger)
}

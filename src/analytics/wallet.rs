use std::collections::BTreeMap;

use tracing::debug;

use super::centrality::CentralityScores;
use super::centrality::PageRankParams;
use crate::Result;
use crate::config::AnalyticsConfig;
use crate::err_with_loc;
use crate::error::AnalyticsError;
use crate::model::Counterparty;
use crate::model::TransactionGraph;
use crate::model::TransactionTable;
use crate::model::WalletAddress;
use crate::model::WalletAnalytics;
use crate::utils::max_or_zero;
use crate::utils::mean_or_zero;

/// Computes the full analytics for `wallet`, recomputing whole-graph
/// centrality on every call.
pub fn analyze(
    wallet: &WalletAddress,
    table: &TransactionTable,
    graph: &TransactionGraph,
    config: &AnalyticsConfig,
) -> Result<WalletAnalytics> {
    ensure_known(wallet, graph)?;
    let scores = CentralityScores::compute(graph, &PageRankParams::from(config));
    analyze_with_scores(wallet, table, graph, &scores, config.top_counterparties)
}

/// Same as [`analyze`] with centrality supplied by the caller (usually from
/// the cache).
pub fn analyze_with_scores(
    wallet: &WalletAddress,
    table: &TransactionTable,
    graph: &TransactionGraph,
    scores: &CentralityScores,
    top_n: usize,
) -> Result<WalletAnalytics> {
    ensure_known(wallet, graph)?;

    let outgoing: Vec<f64> = table.outgoing(wallet).map(|record| record.value).collect();
    let incoming: Vec<f64> = table.incoming(wallet).map(|record| record.value).collect();

    let analytics = WalletAnalytics {
        num_outgoing: outgoing.len(),
        num_incoming: incoming.len(),
        avg_outgoing_value: mean_or_zero(&outgoing),
        avg_incoming_value: mean_or_zero(&incoming),
        largest_transaction: max_or_zero(&outgoing).max(max_or_zero(&incoming)),
        degree_centrality: scores.degree_of(wallet),
        betweenness_centrality: scores.betweenness_of(wallet),
        pagerank: scores.pagerank_of(wallet),
        top_counterparties: top_counterparties(wallet, table, top_n),
    };

    debug!(
        "wallet_analytics::{}::outgoing::{}::incoming::{}",
        wallet, analytics.num_outgoing, analytics.num_incoming
    );

    Ok(analytics)
}

/// Outgoing value summed per receiver, largest first, at most `limit`
/// entries. Equal totals keep ascending address order.
pub fn top_counterparties(
    wallet: &WalletAddress,
    table: &TransactionTable,
    limit: usize,
) -> Vec<Counterparty> {
    let mut totals: BTreeMap<&WalletAddress, f64> = BTreeMap::new();
    for record in table.outgoing(wallet) {
        *totals.entry(&record.to).or_insert(0.0) += record.value;
    }

    let mut ranked: Vec<Counterparty> = totals
        .into_iter()
        .map(|(counterparty, total_value)| Counterparty {
            counterparty: counterparty.clone(),
            total_value,
        })
        .collect();
    ranked.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
    ranked.truncate(limit);
    ranked
}

fn ensure_known(
    wallet: &WalletAddress,
    graph: &TransactionGraph,
) -> Result<()> {
    if graph.contains(wallet) {
        Ok(())
    } else {
        Err(err_with_loc!(AnalyticsError::WalletNotFound(wallet.to_string())))
    }
}

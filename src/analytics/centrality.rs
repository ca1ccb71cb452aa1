use std::collections::HashMap;
use std::collections::VecDeque;

use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::config::AnalyticsConfig;
use crate::model::TransactionGraph;
use crate::model::WalletAddress;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankParams {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankParams {
    fn default() -> Self { Self::from(&AnalyticsConfig::default()) }
}

impl From<&AnalyticsConfig> for PageRankParams {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

/// Whole-graph centrality, keyed by address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityScores {
    pub degree: HashMap<WalletAddress, f64>,
    pub betweenness: HashMap<WalletAddress, f64>,
    pub pagerank: HashMap<WalletAddress, f64>,
}

impl CentralityScores {
    pub fn compute(
        graph: &TransactionGraph,
        params: &PageRankParams,
    ) -> Self {
        let started = std::time::Instant::now();
        let scores = Self {
            degree: degree_centrality(graph),
            betweenness: betweenness_centrality(graph),
            pagerank: pagerank(graph, params),
        };
        debug!(
            "centrality::computed::nodes::{}::edges::{}::elapsed_ms::{}",
            graph.node_count(),
            graph.edge_count(),
            started.elapsed().as_millis()
        );
        scores
    }

    // Addresses outside the metric's domain score 0
    pub fn degree_of(
        &self,
        wallet: &WalletAddress,
    ) -> f64 {
        self.degree.get(wallet).copied().unwrap_or(0.0)
    }

    pub fn betweenness_of(
        &self,
        wallet: &WalletAddress,
    ) -> f64 {
        self.betweenness.get(wallet).copied().unwrap_or(0.0)
    }

    pub fn pagerank_of(
        &self,
        wallet: &WalletAddress,
    ) -> f64 {
        self.pagerank.get(wallet).copied().unwrap_or(0.0)
    }
}

fn keyed_by_address(
    graph: &TransactionGraph,
    scores: Vec<f64>,
) -> HashMap<WalletAddress, f64> {
    graph
        .inner()
        .node_indices()
        .zip(scores)
        .map(|(idx, score)| (graph.inner()[idx].address.clone(), score))
        .collect()
}

/// (in-degree + out-degree) / (n - 1). A self-loop adds one to each side.
/// A lone node scores 1.
pub fn degree_centrality(graph: &TransactionGraph) -> HashMap<WalletAddress, f64> {
    let inner = graph.inner();
    let n = inner.node_count();
    if n == 0 {
        return HashMap::new();
    }
    if n == 1 {
        return keyed_by_address(graph, vec![1.0]);
    }

    let scale = 1.0 / (n - 1) as f64;
    let scores = inner
        .node_indices()
        .map(|idx| {
            let degree = inner.edges_directed(idx, Outgoing).count() + inner.edges_directed(idx, Incoming).count();
            degree as f64 * scale
        })
        .collect();

    keyed_by_address(graph, scores)
}

/// Brandes' algorithm over unweighted directed shortest paths, endpoints
/// excluded, scaled by 1 / ((n - 1)(n - 2)) when n > 2.
pub fn betweenness_centrality(graph: &TransactionGraph) -> HashMap<WalletAddress, f64> {
    let inner = graph.inner();
    let n = inner.node_count();
    let mut centrality = vec![0.0_f64; n];

    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0_f64; n];
    let mut distance = vec![-1_i64; n];
    let mut delta = vec![0.0_f64; n];

    for source in inner.node_indices() {
        let s = source.index();

        stack.clear();
        queue.clear();
        for v in 0..n {
            predecessors[v].clear();
            sigma[v] = 0.0;
            distance[v] = -1;
            delta[v] = 0.0;
        }
        sigma[s] = 1.0;
        distance[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for neighbor in inner.neighbors_directed(NodeIndex::new(v), Outgoing) {
                let w = neighbor.index();
                if distance[w] < 0 {
                    distance[w] = distance[v] + 1;
                    queue.push_back(w);
                }
                if distance[w] == distance[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in &mut centrality {
            *value *= scale;
        }
    }

    keyed_by_address(graph, centrality)
}

/// Damped random walk over edge weights. Each node's out-edges are
/// normalized by its total out-weight; nodes with no out-weight spread their
/// mass uniformly. Stops when the L1 change drops below `n * tolerance`.
pub fn pagerank(
    graph: &TransactionGraph,
    params: &PageRankParams,
) -> HashMap<WalletAddress, f64> {
    let inner = graph.inner();
    let n = inner.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let uniform = 1.0 / n as f64;
    let mut out_weight = vec![0.0_f64; n];
    for edge in inner.edge_references() {
        out_weight[edge.source().index()] += edge.weight().weight;
    }

    let mut rank = vec![uniform; n];
    let mut next = vec![0.0_f64; n];
    let mut converged = false;

    for iteration in 0..params.max_iterations {
        let dangling_mass: f64 = (0..n).filter(|&u| out_weight[u] == 0.0).map(|u| rank[u]).sum();

        next.iter_mut().for_each(|value| *value = 0.0);
        for edge in inner.edge_references() {
            let u = edge.source().index();
            if out_weight[u] != 0.0 {
                next[edge.target().index()] += rank[u] * edge.weight().weight / out_weight[u];
            }
        }

        let mut change = 0.0;
        for v in 0..n {
            let value = params.damping * (next[v] + dangling_mass * uniform) + (1.0 - params.damping) * uniform;
            change += (value - rank[v]).abs();
            next[v] = value;
        }
        std::mem::swap(&mut rank, &mut next);

        if change < n as f64 * params.tolerance {
            debug!("pagerank::converged::iterations::{}", iteration + 1);
            converged = true;
            break;
        }
    }

    if !converged {
        warn!("pagerank::not_converged::max_iterations::{}", params.max_iterations);
    }

    let total: f64 = rank.iter().sum();
    if total > 0.0 {
        rank.iter_mut().for_each(|value| *value /= total);
    }

    keyed_by_address(graph, rank)
}

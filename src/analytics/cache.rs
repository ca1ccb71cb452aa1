use std::sync::Arc;
use std::sync::RwLock;

use tracing::debug;
use tracing::info;

use super::centrality::CentralityScores;
use super::centrality::PageRankParams;
use crate::model::TransactionGraph;

#[derive(Debug)]
struct CachedScores {
    fingerprint: u64,
    params: PageRankParams,
    scores: Arc<CentralityScores>,
}

/// Memoized whole-graph centrality. Entries are keyed by the graph
/// fingerprint and the PageRank parameters, so a rebuilt graph or a changed
/// damping factor never reads stale scores.
#[derive(Debug, Default)]
pub struct CentralityCache {
    inner: RwLock<Option<CachedScores>>,
}

impl CentralityCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_compute(
        &self,
        graph: &TransactionGraph,
        fingerprint: u64,
        params: &PageRankParams,
    ) -> Arc<CentralityScores> {
        {
            let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(cached) = guard.as_ref() {
                if cached.fingerprint == fingerprint && cached.params == *params {
                    debug!("centrality_cache::hit::{:x}", fingerprint);
                    return cached.scores.clone();
                }
            }
        }

        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Another request may have filled it while we waited for the write lock
        if let Some(cached) = guard.as_ref() {
            if cached.fingerprint == fingerprint && cached.params == *params {
                return cached.scores.clone();
            }
        }

        info!("centrality_cache::miss::computing::{:x}", fingerprint);
        let scores = Arc::new(CentralityScores::compute(graph, params));
        *guard = Some(CachedScores {
            fingerprint,
            params: *params,
            scores: scores.clone(),
        });
        scores
    }

    pub fn invalidate(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    pub fn is_warm(&self) -> bool {
        self.inner.read().map(|guard| guard.is_some()).unwrap_or(false)
    }
}

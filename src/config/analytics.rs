use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_DAMPING;
use crate::constants::DEFAULT_MAX_ITERATIONS;
use crate::constants::DEFAULT_TOLERANCE;
use crate::constants::DEFAULT_TOP_COUNTERPARTIES;
use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub top_counterparties: usize,
    pub cache_centrality: bool,
    pub centrality_timeout_ms: Option<u64>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            top_counterparties: DEFAULT_TOP_COUNTERPARTIES,
            cache_centrality: true,
            centrality_timeout_ms: None,
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "analytics.damping must be in (0, 1), got {}",
                self.damping
            ))));
        }
        if !(self.tolerance > 0.0) {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "analytics.tolerance must be positive, got {}",
                self.tolerance
            ))));
        }
        if self.max_iterations == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue("analytics.max_iterations must be > 0".to_string())));
        }
        Ok(())
    }
}

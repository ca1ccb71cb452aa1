use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::Result;
use crate::chart::encode_base64;
use crate::chart::render_trend_chart;
use crate::config::AnalyticsConfig;
use crate::config::ChartConfig;
use crate::model::WalletAddress;
use crate::model::WalletAnalytics;
use crate::storage::Ledger;

/// Analytics plus the base64 PNG trend chart; `trend_plot` is `None` when
/// the wallet has no activity to chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletReport {
    pub analytics:  WalletAnalytics,
    pub trend_plot: Option<String>,
}

/// Answers wallet queries against the shared ledger. Cheap to share: the
/// ledger is reference counted and nothing here is mutated per query.
#[derive(Debug, Clone)]
pub struct QueryHandler {
    pub ledger:    Ledger,
    pub analytics: AnalyticsConfig,
    pub chart:     ChartConfig,
}

impl QueryHandler {
    pub fn new(
        ledger: Ledger,
        analytics: AnalyticsConfig,
        chart: ChartConfig,
    ) -> Self {
        Self {
            ledger,
            analytics,
            chart,
        }
    }

    pub fn contains(
        &self,
        raw_wallet: &str,
    ) -> bool {
        self.ledger.contains(&WalletAddress::normalize(raw_wallet))
    }

    pub fn report(
        &self,
        raw_wallet: &str,
    ) -> Result<WalletReport> {
        self.report_with_png(raw_wallet).map(|(report, _)| report)
    }

    /// The report plus the raw PNG its `trend_plot` was encoded from, so
    /// callers writing the chart to disk do not render it again.
    pub fn report_with_png(
        &self,
        raw_wallet: &str,
    ) -> Result<(WalletReport, Option<Vec<u8>>)> {
        let wallet = WalletAddress::normalize(raw_wallet);
        info!("query::wallet::{}", wallet);

        let analytics = self.ledger.analyze(&wallet, &self.analytics)?;
        let png = self.trend_png(&wallet)?;
        let report = WalletReport {
            analytics,
            trend_plot: png.as_deref().map(encode_base64),
        };

        Ok((report, png))
    }

    /// Raw PNG bytes of the trend chart, `None` for a wallet without rows.
    pub fn trend_png(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<Vec<u8>>> {
        match self.ledger.trend(wallet) {
            Some(series) => {
                debug!("query::trend::{}::days::{}", wallet, series.len());
                Ok(Some(render_trend_chart(&series, &self.chart)?))
            },
            None => {
                debug!("query::trend::{}::no_data", wallet);
                Ok(None)
            },
        }
    }
}

#![allow(dead_code)]

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::TimeZone;
use chrono::Utc;
use mizan::config::AnalyticsConfig;
use mizan::config::ChartConfig;
use mizan::handler::QueryHandler;
use mizan::model::TransactionGraph;
use mizan::model::TransactionTable;
use mizan::model::TransferRecord;
use mizan::model::WalletAddress;
use mizan::storage::Ledger;

pub const CSV_HEADER: &str = "Txhash,DateTime (UTC),From,To,Value_OUT(ETH)";

/// Shared test data for the wallet analytics suites
pub struct TestFixtures;

impl TestFixtures {
    pub fn new() -> Self { Self }

    pub fn day(
        &self,
        day: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, day, 12, 0, 0).single().expect("valid fixture date")
    }

    pub fn date(
        &self,
        day: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, day).expect("valid fixture date")
    }

    pub fn wallet(
        &self,
        raw: &str,
    ) -> WalletAddress {
        WalletAddress::normalize(raw)
    }

    pub fn record(
        &self,
        from: &str,
        to: &str,
        value: f64,
        day: u32,
    ) -> TransferRecord {
        TransferRecord::new(from, to, value, self.day(day))
    }

    /// A->B 10 on day 1, A->B 5 on day 2, C->A 3 on day 1.
    pub fn basic_table(&self) -> TransactionTable {
        TransactionTable::new(vec![
            self.record("A", "B", 10.0, 1),
            self.record("A", "B", 5.0, 2),
            self.record("C", "A", 3.0, 1),
        ])
    }

    /// Same shape as `basic_table` but wallet A skips day 2 entirely.
    pub fn gapped_table(&self) -> TransactionTable {
        TransactionTable::new(vec![
            self.record("A", "B", 10.0, 1),
            self.record("A", "B", 5.0, 3),
            self.record("C", "A", 3.0, 1),
        ])
    }

    pub fn basic_graph(&self) -> TransactionGraph { TransactionGraph::from_table(&self.basic_table()) }

    pub fn ledger(
        &self,
        table: TransactionTable,
    ) -> Ledger {
        Ledger::new(table, true)
    }

    pub fn query_handler(
        &self,
        table: TransactionTable,
    ) -> QueryHandler {
        QueryHandler::new(self.ledger(table), AnalyticsConfig::default(), ChartConfig::default())
    }

    pub fn csv(
        &self,
        rows: &[&str],
    ) -> String {
        let mut csv = String::from(CSV_HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }
}

/// Float comparison with an absolute tolerance.
pub fn assert_close(
    actual: f64,
    expected: f64,
) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

pub fn assert_close_within(
    actual: f64,
    expected: f64,
    tolerance: f64,
) {
    assert!((actual - expected).abs() < tolerance, "expected {expected} +/- {tolerance}, got {actual}");
}

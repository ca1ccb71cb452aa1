use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::WalletAddress;

/// One cleaned ledger row. All four fields are present and `value` is a
/// finite, nonnegative number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from: WalletAddress,
    pub to: WalletAddress,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl TransferRecord {
    pub fn new(
        from: impl Into<WalletAddress>,
        to: impl Into<WalletAddress>,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
            timestamp,
        }
    }

    pub fn date(&self) -> NaiveDate { self.timestamp.date_naive() }

    pub fn touches(
        &self,
        wallet: &WalletAddress,
    ) -> bool {
        &self.from == wallet || &self.to == wallet
    }
}

/// The cleaned ledger in input order. Built once and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionTable {
    records: Vec<TransferRecord>,
}

impl TransactionTable {
    pub fn new(records: Vec<TransferRecord>) -> Self { Self { records } }

    pub fn records(&self) -> &[TransferRecord] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferRecord> { self.records.iter() }

    pub fn outgoing<'a>(
        &'a self,
        wallet: &'a WalletAddress,
    ) -> impl Iterator<Item = &'a TransferRecord> + 'a {
        self.records.iter().filter(move |record| &record.from == wallet)
    }

    pub fn incoming<'a>(
        &'a self,
        wallet: &'a WalletAddress,
    ) -> impl Iterator<Item = &'a TransferRecord> + 'a {
        self.records.iter().filter(move |record| &record.to == wallet)
    }

    pub fn involving<'a>(
        &'a self,
        wallet: &'a WalletAddress,
    ) -> impl Iterator<Item = &'a TransferRecord> + 'a {
        self.records.iter().filter(move |record| record.touches(wallet))
    }

    pub fn total_value(&self) -> f64 { self.records.iter().map(|record| record.value).sum() }
}

impl FromIterator<TransferRecord> for TransactionTable {
    fn from_iter<I: IntoIterator<Item = TransferRecord>>(iter: I) -> Self { Self::new(iter.into_iter().collect()) }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a TransferRecord;
    type IntoIter = std::slice::Iter<'a, TransferRecord>;

    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

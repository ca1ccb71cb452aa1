use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::TransactionTable;
use crate::model::TrendPoint;
use crate::model::TrendSeries;
use crate::model::WalletAddress;

/// Daily volume of every transfer the wallet sends or receives, with gaps
/// between the first and last active day filled by 0. `None` when the wallet
/// never appears in the table.
pub fn trend(
    wallet: &WalletAddress,
    table: &TransactionTable,
) -> Option<TrendSeries> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in table.involving(wallet) {
        *daily.entry(record.date()).or_insert(0.0) += record.value;
    }

    let (&first, _) = daily.first_key_value()?;
    let (&last, _) = daily.last_key_value()?;

    let mut points = Vec::with_capacity((last - first).num_days() as usize + 1);
    let mut day = Some(first);
    while let Some(date) = day.filter(|date| *date <= last) {
        points.push(TrendPoint {
            date,
            volume: daily.get(&date).copied().unwrap_or(0.0),
        });
        day = date.succ_opt();
    }

    Some(TrendSeries::new(points))
}

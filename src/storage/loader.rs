use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use csv::ReaderBuilder;
use csv::StringRecord;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::Result;
use crate::config::DatasetConfig;
use crate::err_with_loc;
use crate::error::LoaderError;
use crate::model::TransactionTable;
use crate::model::TransferRecord;
use crate::model::WalletAddress;

const UNIX_SECONDS_DIGITS: std::ops::RangeInclusive<usize> = 9..=10;
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub dropped_rows: usize,
}

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    from: usize,
    to: usize,
    value: usize,
    timestamp: usize,
}

impl ColumnMap {
    fn resolve(
        headers: &StringRecord,
        config: &DatasetConfig,
    ) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| err_with_loc!(LoaderError::MissingColumn(name.to_string())))
        };

        Ok(Self {
            from: find(&config.from_column)?,
            to: find(&config.to_column)?,
            value: find(&config.value_column)?,
            timestamp: find(&config.timestamp_column)?,
        })
    }
}

pub fn load_table(config: &DatasetConfig) -> Result<(TransactionTable, LoadReport)> {
    let path = Path::new(&config.path);
    let file =
        File::open(path).map_err(|e| err_with_loc!(LoaderError::OpenFileError(format!("{}: {}", path.display(), e))))?;
    info!("record_loader::reading::{}", path.display());
    read_table(file, config)
}

/// Parses CSV transfers into the cleaned table. Rows with an absent field,
/// a non-numeric or negative value, or an unreadable timestamp are dropped.
/// A missing column or a structurally broken file fails the whole load.
pub fn read_table<R: Read>(
    reader: R,
    config: &DatasetConfig,
) -> Result<(TransactionTable, LoadReport)> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers().map_err(|e| err_with_loc!(LoaderError::MalformedRecord(e)))?.clone();
    let columns = ColumnMap::resolve(&headers, config)?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for row in reader.records() {
        let row = row.map_err(|e| err_with_loc!(LoaderError::MalformedRecord(e)))?;
        report.total_rows += 1;

        match clean_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                report.dropped_rows += 1;
                debug!("record_loader::dropped_row::{}", row.position().map(|p| p.line()).unwrap_or(0));
            },
        }
    }

    report.kept_rows = records.len();
    info!(
        "record_loader::loaded::total::{}::kept::{}::dropped::{}",
        report.total_rows, report.kept_rows, report.dropped_rows
    );

    Ok((TransactionTable::new(records), report))
}

fn clean_row(
    row: &StringRecord,
    columns: &ColumnMap,
) -> Option<TransferRecord> {
    let from = WalletAddress::parse(row.get(columns.from)?)?;
    let to = WalletAddress::parse(row.get(columns.to)?)?;
    let value = parse_value(row.get(columns.value)?)?;
    let timestamp = parse_timestamp(row.get(columns.timestamp)?)?;

    Some(TransferRecord {
        from,
        to,
        value,
        timestamp,
    })
}

/// Numeric coercion: finite and nonnegative, anything else is invalid.
pub fn parse_value(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` (also with `T`), a bare date,
/// or 9-10 digit Unix seconds. Zone-less inputs are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|timestamp| timestamp.and_utc());
    }

    parse_unix_seconds(raw)
}

// 9-10 digits spans 1973..2286; compact dates like 20230416 stay invalid
fn parse_unix_seconds(raw: &str) -> Option<DateTime<Utc>> {
    if !(UNIX_SECONDS_DIGITS.contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    raw.parse::<i64>().ok().and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}

use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_FROM_COLUMN;
use crate::constants::DEFAULT_TIMESTAMP_COLUMN;
use crate::constants::DEFAULT_TO_COLUMN;
use crate::constants::DEFAULT_VALUE_COLUMN;

/// Where the transfer ledger lives and which header names carry the four
/// required fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
    #[serde(default = "default_from_column")]
    pub from_column: String,
    #[serde(default = "default_to_column")]
    pub to_column: String,
    #[serde(default = "default_value_column")]
    pub value_column: String,
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
}

impl DatasetConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from_column: default_from_column(),
            to_column: default_to_column(),
            value_column: default_value_column(),
            timestamp_column: default_timestamp_column(),
        }
    }
}

fn default_from_column() -> String { DEFAULT_FROM_COLUMN.to_string() }

fn default_to_column() -> String { DEFAULT_TO_COLUMN.to_string() }

fn default_value_column() -> String { DEFAULT_VALUE_COLUMN.to_string() }

fn default_timestamp_column() -> String { DEFAULT_TIMESTAMP_COLUMN.to_string() }

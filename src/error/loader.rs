use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("[Loader] Failed to open dataset: {0}")]
    OpenFileError(String),
    #[error("[Loader] Required column missing from header: {0}")]
    MissingColumn(String),
    #[error("[Loader] Malformed record: {0}")]
    MalformedRecord(#[from] csv::Error),
}

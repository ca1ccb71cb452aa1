use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("[Chart] Failed to encode image: {0}")]
    EncodeError(#[from] image::ImageError),
    #[error("[Chart] Failed to write chart file: {0}")]
    WriteError(String),
}

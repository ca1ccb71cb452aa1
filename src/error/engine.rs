use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to setup tracing: {0}")]
    SetupTracingError(String),
    #[error("Http server error: {0}")]
    ServerError(String),
    #[error("Computation timed out after {0}ms")]
    TimeoutError(u64),
    #[error("Blocking task failed: {0}")]
    BlockingError(String),
}

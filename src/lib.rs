pub mod analytics;
pub mod chart;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handler;
pub mod model;
pub mod storage;
pub mod tracing;
pub mod utils;

pub use engine::*;
pub use error::Result;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::CrateLevelFilter;
use super::filter::DEBUG_ONLY;
use super::filter::ERROR_ONLY;
use super::filter::INFO_AND_ABOVE;
use super::filter::WARN_AND_ERROR;
use super::format::MizanFormat;
use crate::config::LoggingConfig;
use crate::err_with_loc;
use crate::error::EngineError;

/// Keeps the non-blocking file writers flushing. Drop it only at shutdown.
#[must_use = "dropping the guard stops file logging"]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

fn default_terminal_filter() -> CrateLevelFilter { if cfg!(feature = "dev") { INFO_AND_ABOVE } else { ERROR_ONLY } }

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> crate::Result<TracingGuard> {
    // Base logs directory
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(".logs"));
    let rotation = Rotation::from(logging_config.rotation);

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];
    for dir in &logs_dirs {
        std::fs::create_dir_all(dir).map_err(|e| {
            err_with_loc!(EngineError::SetupTracingError(format!(
                "failed to create logs directory {}: {}",
                dir.display(),
                e
            )))
        })?;
    }

    let debug_appender =
        RollingFileAppender::new(rotation.clone(), base_logs_dir.join("debug"), format!("{}.log", engine_name));
    let error_appender =
        RollingFileAppender::new(rotation.clone(), base_logs_dir.join("error"), format!("{}.log", engine_name));

    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
    #[cfg_attr(not(feature = "dev"), allow(unused_mut))]
    let mut guards = vec![debug_guard, error_guard];

    let format = MizanFormat::new(engine_name);

    // RUST_LOG, when present, replaces the default terminal filter
    let env_filter = EnvFilter::try_from_default_env().ok();
    let use_default_terminal = env_filter.is_none();

    let subscriber = tracing_subscriber::registry()
        // DEBUG log file - debug only using custom filter
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DEBUG_ONLY),
        )
        // ERROR log file - warn and error only
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(WARN_AND_ERROR),
        )
        // Terminal output driven by RUST_LOG
        .with(env_filter.map(|filter| {
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_filter(filter)
        }))
        // Terminal output with the build's default level
        .with(use_default_terminal.then(|| {
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_filter(default_terminal_filter())
        }));

    #[cfg(feature = "dev")]
    let subscriber = {
        let info_appender = RollingFileAppender::new(rotation.clone(), base_logs_dir, format!("{}.log", engine_name));
        let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
        guards.push(info_guard);
        // INFO log file - info and above
        subscriber.with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(non_blocking_info)
                .with_filter(INFO_AND_ABOVE),
        )
    };

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            tracing::info!("{}_logging_started::debug_logs::{}", engine_name, base_logs_dir.join("debug").display());
            tracing::info!("{}_logging_started::error_logs::{}", engine_name, base_logs_dir.join("error").display());
        },
        Err(e) => {
            eprintln!("Error setting up logging: {}", e);
        },
    }

    Ok(TracingGuard { _guards: guards })
}

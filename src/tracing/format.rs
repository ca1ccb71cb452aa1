use chrono::Utc;
use tracing::Event;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One line per event: `LEVEL timestamp::engine::file::line::[span::]message`.
/// Events without a source location are dropped unless `deep-trace` is on.
#[derive(Debug, Clone)]
pub struct MizanFormat {
    pub engine_name: String,
}

impl MizanFormat {
    pub fn new(engine_name: impl Into<String>) -> Self {
        Self {
            engine_name: engine_name.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for MizanFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        if metadata.file().is_none() && !cfg!(feature = "deep-trace") {
            return Ok(());
        }

        write!(
            writer,
            "{:<5} {}::{}::{}::{}::",
            metadata.level(),
            Utc::now().format(TIMESTAMP_FORMAT),
            self.engine_name,
            metadata.file().map(short_path).unwrap_or("unknown"),
            metadata.line().unwrap_or(0)
        )?;

        // startup work runs inside #[instrument] spans
        if let Some(span) = ctx.lookup_current() {
            write!(writer, "{}::", span.name())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn short_path(file: &str) -> &str { file.strip_prefix("src/").unwrap_or(file) }

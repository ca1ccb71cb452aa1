use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

const CRATE_TARGET: &str = "mizan";

/// Passes events emitted by this crate whose level lies in an inclusive
/// range. `tracing` orders levels by verbosity, so ERROR is the low end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrateLevelFilter {
    least_verbose: Level,
    most_verbose: Level,
}

impl CrateLevelFilter {
    pub const fn between(
        least_verbose: Level,
        most_verbose: Level,
    ) -> Self {
        Self {
            least_verbose,
            most_verbose,
        }
    }

    pub const fn only(level: Level) -> Self { Self::between(level, level) }

    pub const fn at_least(level: Level) -> Self { Self::between(Level::ERROR, level) }

    pub fn admits(
        &self,
        level: &Level,
        target: &str,
    ) -> bool {
        is_own_target(target) && *level >= self.least_verbose && *level <= self.most_verbose
    }
}

// debug/ file
pub const DEBUG_ONLY: CrateLevelFilter = CrateLevelFilter::only(Level::DEBUG);
// error/ file
pub const WARN_AND_ERROR: CrateLevelFilter = CrateLevelFilter::between(Level::ERROR, Level::WARN);
// dev terminal and info file
pub const INFO_AND_ABOVE: CrateLevelFilter = CrateLevelFilter::at_least(Level::INFO);
// prod terminal
pub const ERROR_ONLY: CrateLevelFilter = CrateLevelFilter::only(Level::ERROR);

fn is_own_target(target: &str) -> bool {
    target == CRATE_TARGET || target.strip_prefix(CRATE_TARGET).is_some_and(|rest| rest.starts_with("::"))
}

impl<S> Filter<S> for CrateLevelFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        self.admits(meta.level(), meta.target())
    }
}

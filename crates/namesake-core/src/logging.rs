use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "collect_stats");
/// // Or with additional fields:
/// trace_time!(start, "collect_stats", tokens = stats.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Quiet by default, but batch progress stays visible during long checks
pub const DEFAULT_DIRECTIVES: &str = "namesake=warn,namesake_core=warn,namesake_core::batch=info";

/// `--verbose`: classifier and matcher decisions, plus catalog responses
pub const VERBOSE_DIRECTIVES: &str = "namesake=debug,namesake_core=debug,\
namesake_core::extract=trace,namesake_core::archives=trace";

/// Environment variable read when `RUST_LOG` is unset
pub const LOG_ENV_VAR: &str = "NAMESAKE_LOG";

/// Initialize structured logging based on CLI arguments
///
/// `RUST_LOG` wins over `NAMESAKE_LOG`, which wins over the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directives(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    if log_json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer.compact().with_target(verbose)).try_init()?;
    }

    Ok(())
}

/// Filter directives for the CLI flags
///
/// A bare level such as `info` applies to both namesake crates; anything
/// containing `=` is passed through as a full directive list.
pub fn directives(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("namesake={level},namesake_core={level}"),
        None if verbose => VERBOSE_DIRECTIVES.to_string(),
        None => DEFAULT_DIRECTIVES.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_batch_progress() {
        let d = directives(false, None);
        assert!(d.contains("namesake_core=warn"));
        assert!(d.contains("namesake_core::batch=info"));
    }

    #[test]
    fn test_verbose_traces_extraction() {
        let d = directives(true, None);
        assert!(d.contains("namesake_core=debug"));
        assert!(d.contains("namesake_core::extract=trace"));
        assert!(d.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_bare_level_applies_to_both_crates() {
        assert_eq!(
            directives(true, Some("info")),
            "namesake=info,namesake_core=info"
        );
    }

    #[test]
    fn test_explicit_filter_passes_through() {
        assert_eq!(
            directives(false, Some("namesake_core::matcher=trace")),
            "namesake_core::matcher=trace"
        );
    }
}

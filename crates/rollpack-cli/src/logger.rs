//! Logging infrastructure for the rollpack CLI.
//!
//! Sets up a `tracing` subscriber writing compact, optionally colored lines to
//! stderr. The level is chosen from the global flags or `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "rollpack=debug,rollpack_config=debug,rollpack_cli=debug";
const QUIET_FILTER: &str = "rollpack=error,rollpack_config=error,rollpack_cli=error";
const DEFAULT_FILTER: &str = "rollpack=info,rollpack_config=info,rollpack_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs.
///
/// The filter is chosen in this order:
/// 1. `verbose`: DEBUG for rollpack crates
/// 2. `quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for rollpack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// terminal capabilities of stderr decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // tests only exercise filter construction.

    #[test]
    fn verbose_filter_enables_debug() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("rollpack=debug"));
    }

    #[test]
    fn verbose_wins_over_quiet() {
        let filter = filter_for(true, true);
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn quiet_filter_only_errors() {
        let filter = filter_for(false, true);
        assert!(!filter.to_string().contains("info"));
        assert!(filter.to_string().contains("rollpack=error"));
    }
}

//! Logging for fitplan.
//!
//! Everything goes to stderr. Stdout belongs to the rendered plan, so
//! `fitplan plan --json` output can be piped straight into a JSON parser.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: planner events at `info`, or every pipeline step at `debug`
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "planner_core=debug,fitplan=debug,info"
    } else {
        "warn,planner_core=info,fitplan=info"
    }
}

/// Install the stderr subscriber. RUST_LOG takes precedence over `default_filter`.
pub fn init_with_level(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Route planner events into the test harness output. Safe to call from every test.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(level_for(true)))
        .try_init();
}

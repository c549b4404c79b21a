//! Tracing subscriber setup for the `nebula` binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise nebula crates log at `info`
/// (`debug` with `verbose`) and everything else at `info`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,nebula_web=debug,nebula_content=debug,nebula_inquiry=debug,tower_http=debug")
    } else {
        EnvFilter::new("info")
    }
}

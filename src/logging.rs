//! Logging setup for the CLI using `tracing` and `tracing-subscriber`.
//!
//! The library only emits `debug` (adapter writes) and `trace` (unchanged values)
//! events. `RUST_LOG` takes precedence over the `-v` count.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map `-v` occurrences to a level: none = warn, -v = info, -vv = debug, -vvv = trace.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()))
}

/// Install a stderr subscriber. Returns false if one was already installed.
pub fn init_logging(verbose: u8) -> bool {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    tracing_subscriber::registry()
        .with(build_env_filter(level_from_verbosity(verbose)))
        .with(layer)
        .try_init()
        .is_ok()
}

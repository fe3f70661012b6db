// src/utils/logging.rs
use atty::Stream;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stdout subscriber. `RUST_LOG` picks the filter, "info" otherwise.
///
/// Color is only used on an interactive terminal so CI logs carry no escape codes.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = use_color(atty::is(Stream::Stdout), std::env::var_os("NO_COLOR").is_some());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .init();

    tracing::debug!("Logging to stdout (ansi={})", ansi);
}

fn use_color(stdout_is_tty: bool, no_color: bool) -> bool {
    stdout_is_tty && !no_color
}

//! Diagnostics setup: `tracing` subscriber and progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialise tracing once for the process.
///
/// `RUST_LOG` wins over `default_filter`. Output goes to stderr so it never
/// mixes with CSV on stdout.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// Spinner on stderr counting processed records.
///
/// Hidden when `enabled` is false so batch runs stay quiet.
pub fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

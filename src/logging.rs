//! Process-wide logging setup.
//!
//! Configured once from `--quiet` before any other work. The filter is built
//! from the flag alone; `RUST_LOG` is not consulted.

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter directive for the requested verbosity.
fn filter_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Build the `LEVEL message` subscriber used by the CLI, writing to `writer`.
pub(crate) fn subscriber<W>(quiet: bool, writer: W, ansi: bool) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(quiet)))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(quiet: bool) {
    let ansi = std::io::stderr().is_terminal();
    let _ = tracing::subscriber::set_global_default(subscriber(quiet, std::io::stderr, ansi));
}

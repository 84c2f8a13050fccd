use tracing_subscriber::EnvFilter;

use crate::stderr_buffer::BufferedStderr;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `shortlist=warn`, or `shortlist=debug`
/// with `--verbose`. Output goes through the stderr buffer so nothing is
/// written over the TUI while it owns the terminal.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "shortlist=debug" } else { "shortlist=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(|| BufferedStderr)
        .try_init();
}

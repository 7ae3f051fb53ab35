//! Console logging setup for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` for this crate when
/// `verbose` is on. Safe to call more than once: later calls are no-ops.
pub fn init(verbose: bool) {
    let default = if verbose {
        "info,fullsize_grabber=debug"
    } else {
        "info"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

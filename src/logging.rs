//! Diagnostic tracing for the CLI.
//!
//! Events go to stderr so stdout only ever carries the rendered tree.
//! Verbosity is read from `RUST_LOG` and defaults to `warn`:
//!
//! ```bash
//! RUST_LOG=dirtree=debug dirtree . -f
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

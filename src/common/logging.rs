//! Log output for the binary.
//!
//! Library code logs through the `log` facade. `init` installs a
//! `tracing-subscriber` formatter that also receives those `log` records,
//! filtered by `RUST_LOG` (default `info`).

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(filter)
            .init();

        log::debug!("Logging initialized");
    });
}

//! tracing subscriber setup
//!
//! logs go to stderr so stdout stays parseable. the filter comes from
//! `AGENT_HOOKS_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "AGENT_HOOKS_LOG";

static INIT: Once = Once::new();

/// install the global subscriber, later calls are ignored
pub fn init(debug: bool) {
    INIT.call_once(|| {
        let filter = if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(debug)
            .without_time();

        // a subscriber may already be installed
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}

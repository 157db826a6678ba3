//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SARICA_LOG";

/// Filter used when `SARICA_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "sarica=info";

/// Initialize the Sarica tracing/logging system.
///
/// Reads `SARICA_LOG` for per-module log levels, e.g.
/// `SARICA_LOG=sarica_storage=debug,sarica_essence=info`.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: an embedding application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

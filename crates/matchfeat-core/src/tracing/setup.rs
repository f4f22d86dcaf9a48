//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the matchfeat tracing/logging system.
///
/// Reads the `MATCHFEAT_LOG` environment variable as an `EnvFilter`.
/// Format: `MATCHFEAT_LOG=matchfeat_extract=debug,matchfeat_core=warn`
///
/// Falls back to `matchfeat=info` if `MATCHFEAT_LOG` is unset or invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MATCHFEAT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("matchfeat=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}

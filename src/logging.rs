//! Diagnostic logging setup.
//!
//! User-facing output (banner, change lines, sync results) is printed by the
//! `ui` layer. `tracing` carries diagnostics only and writes to stderr so it
//! never interleaves with rsync's stdout stream.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "SSYNC_LOG";

const DEFAULT_LOG_FILTER: &str = "ssync=warn";
const VERBOSE_LOG_FILTER: &str = "ssync=debug";

/// Install the global subscriber.
///
/// `SSYNC_LOG` wins when set; otherwise `debug_level` > 0 enables debug
/// output for this crate. Calling this twice is harmless.
pub fn init_logging(debug_level: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(if debug_level > 0 {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}

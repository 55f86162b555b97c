//! Structured logging configuration.
//!
//! Console-only subscriber on stderr so diagnostics never mix with the
//! progress lines on stdout. Verbosity comes from `RUST_LOG` and defaults
//! to warnings, keeping normal runs quiet.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system. Call once, before any other work.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

//! Logging setup shared by the shopauth crates.
//!
//! Library code only emits `tracing` events; the host application (or a test)
//! decides whether to install a subscriber. `init` is safe to call more than
//! once because it uses `try_init`.

use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use shopauth_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific level for the shopauth crates.
///
/// `RUST_LOG` still applies to everything else.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    match format!("shopauth={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => warn!("ignoring log directive for level {}: {}", level, e),
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

//! Logging utilities for the Kickndji application.
//!
//! All crates log through the `tracing` macros; this module only installs
//! the subscriber.

use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use kickndji_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured; `level` is added as the directive for the
/// `kickndji` crates on top of it. Calling this more than once is harmless.
///
/// # Arguments
///
/// * `level` - The minimum log level for the `kickndji` targets.
pub fn init_with_level(level: Level) {
    // Directive targets match by prefix, so this covers every kickndji_* crate
    let mut filter = EnvFilter::from_default_env();
    let mut rejected_directive = None;
    match format!("kickndji={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => rejected_directive = Some(e),
    }

    // try_init: a global subscriber may already be installed (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
        if let Some(e) = rejected_directive {
            warn!("Ignored invalid log directive: {}", e);
        }
    }
}

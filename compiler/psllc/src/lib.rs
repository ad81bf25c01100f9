//! psll Compiler Driver
//!
//! Glue between the command line and the compiler crates: option parsing,
//! file I/O and logging setup. The binary lives in `main.rs`.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once per process.
///
/// With `verbose`, events are drawn as an indented span tree on stderr and
/// the filter defaults to `debug`. Otherwise logging is off unless
/// `RUST_LOG` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let from_env = std::env::var("RUST_LOG").is_ok();
        if verbose {
            let filter = if from_env {
                EnvFilter::from_default_env()
            } else {
                EnvFilter::new("debug")
            };
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else if from_env {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

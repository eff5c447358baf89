//! Flow command-line front end.
//!
//! File mode, interactive mode and batch mode over the `flow_parse` front end
//! and the `flow_eval` interpreter, plus tracing setup and diagnostic
//! rendering.

use std::sync::Once;

pub mod cli;
pub mod commands;
mod error;
pub mod report;

pub use error::FlowError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber.
///
/// Only installs a subscriber when `RUST_LOG` is set. With `FLOW_LOG_TREE`
/// also set, spans are rendered as an indented tree instead of flat lines.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("FLOW_LOG_TREE").is_some();
        tracing_subscriber::registry()
            .with(tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true)))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr)
            }))
            .with(filter)
            .init();
    });
}

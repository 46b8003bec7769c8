//! Console logging for the page runtime.
//!
//! Events from every crate go through `tracing`. In the browser there is no
//! stdout, so a custom layer formats each event into a single line and hands
//! it to the matching `console.*` method.
//!
//! ## Usage
//!
//! ```ignore
//! use cola_site::logging;
//!
//! logging::init("debug");
//! tracing::info!(features = 3, "page attached");
//! // console.info: "[cola_site] page attached features=3"
//! ```

pub mod entry;
pub mod layer;

pub use entry::ConsoleEntry;
pub use layer::ConsoleLayer;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

/// Parse a level name, falling back to `info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// Install the console subscriber. Later calls are ignored.
pub fn init(level: &str) {
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(parse_level(level)));
    let _ = tracing::subscriber::set_global_default(subscriber);
}

//! # Core types and shared infrastructure
//!
//! This crate holds the types that are shared between the converter
//! library and the command line interface.
//!
//! It contains the following modules:
//!
//! ## types
//!
//! The runtime `Config`, the metadata record extracted out of each
//! archive document, and the per-file / per-batch result types that the
//! converter reports back to its caller.
//!
//! # Usage
//!
//! The core library itself only describes the data moving through a
//! conversion run. The actual extraction and writing lives in the
//! `mt-converter` crate, which consumes these types.

mod types;

pub use types::{BatchSummary, Config, ConversionOutcome, DocumentMeta};

// Re-Export some dependencies so they don't
// need to be listed again in other Cargo tomls
pub use chrono;
pub use eyre;
pub use tracing;

// Tracing

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub fn setup_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "error")
    }

    let collector = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stdout));

    tracing::subscriber::set_global_default(collector).expect("Unable to set a global collector");
}

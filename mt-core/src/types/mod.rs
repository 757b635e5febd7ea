mod config;
mod document;

pub use config::Config;
pub use document::{BatchSummary, ConversionOutcome, DocumentMeta};

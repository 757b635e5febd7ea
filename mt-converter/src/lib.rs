mod assemble;
mod convert;
mod dates;
mod extract;
mod markdown;

pub use assemble::assemble_document;
pub use convert::{convert_document, convert_folder};
pub use dates::format_date;
pub use extract::{extract_body, extract_metadata};
pub use markdown::markdown_to_text;

pub use mt_core::{BatchSummary, Config, ConversionOutcome, DocumentMeta};

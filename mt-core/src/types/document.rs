use std::path::PathBuf;

/// The metadata fields extracted out of one archive document.
///
/// Every field is filled independently, so any of them can be missing
/// without affecting the others. A missing `year` is the one condition
/// that makes a document unprocessable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: Option<String>,
    /// The raw date header, exactly as it appears in the document
    pub date: Option<String>,
    /// The first 4-digit run inside `date`, used as the bucket name
    pub year: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
}

/// What happened to a single archive document.
#[derive(Debug)]
pub enum ConversionOutcome {
    /// The document was converted and written to this path
    Written(PathBuf),
    /// No year could be derived from the document, nothing was written
    MissingYear,
}

/// Tally of a whole conversion run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: usize,
    pub errors: usize,
    /// The output root the converted files were written below
    pub output_folder: PathBuf,
}

use mt_core::eyre::{bail, Result};
use mt_core::tracing;

use std::fs;
use std::path::{Path, PathBuf};

use mt_core::{BatchSummary, Config, ConversionOutcome};

use crate::{assemble, extract, markdown};

/// The extension the archive documents carry.
const SOURCE_EXTENSION: &str = "md";
/// The extension of the converted documents.
const TARGET_EXTENSION: &str = "txt";

/// Convert a single archive document and write it into the year bucket
/// below `output_folder`.
///
/// A document without a derivable year is skipped: nothing is written
/// and [`ConversionOutcome::MissingYear`] is returned so the caller can
/// tally it without treating it as a hard failure.
pub fn convert_document(path: &Path, output_folder: &Path) -> Result<ConversionOutcome> {
    let content = fs::read_to_string(path)?;

    let meta = extract::extract_metadata(&content);
    let year = match &meta.year {
        Some(year) => year.clone(),
        None => {
            tracing::warn!("Could not extract a year from {}", path.display());
            return Ok(ConversionOutcome::MissingYear);
        }
    };

    let body = markdown::markdown_to_text(&extract::extract_body(&content));
    let document = assemble::assemble_document(&meta, &body);

    let year_folder = output_folder.join(&year);
    fs::create_dir_all(&year_folder)?;

    let stem = match path.file_stem() {
        Some(stem) => stem,
        None => bail!("No usable file name in {}", path.display()),
    };
    let mut target = year_folder.join(stem);
    target.set_extension(TARGET_EXTENSION);

    fs::write(&target, document)?;
    tracing::trace!("Wrote {}", target.display());

    Ok(ConversionOutcome::Written(target))
}

/// Convert every archive document in the configured folder.
///
/// One document failing never aborts the run; failures are counted and
/// the batch keeps going. Only a missing archive folder stops the run
/// before any file is touched.
pub fn convert_folder(config: &Config) -> Result<BatchSummary> {
    if !config.archive_folder.is_dir() {
        bail!(
            "The archive folder at '{}' isn't accessible",
            config.archive_folder.display()
        );
    }
    fs::create_dir_all(&config.output_folder)?;

    let documents = archive_documents(&config.archive_folder)?;
    println!("Found {} Markdown files to process...", documents.len());

    let mut summary = BatchSummary {
        output_folder: config.output_folder.clone(),
        ..Default::default()
    };

    for path in documents {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        match convert_document(&path, &config.output_folder) {
            Ok(ConversionOutcome::Written(_)) => {
                summary.converted += 1;
                println!("[OK] Converted: {}", name);
            }
            Ok(ConversionOutcome::MissingYear) => {
                summary.errors += 1;
                println!("[ERROR] Could not convert: {}", name);
            }
            Err(report) => {
                summary.errors += 1;
                tracing::error!("{} {:?}", path.display(), &report);
                println!("[ERROR] Failed to process {}: {}", name, report);
            }
        }
    }

    println!();
    println!("Conversion finished!");
    println!("  - Converted: {}", summary.converted);
    println!("  - Errors: {}", summary.errors);
    println!("  - Files saved to: {}", summary.output_folder.display());

    Ok(summary)
}

/// All Markdown files directly inside `folder`, sorted by name so the
/// processing order and the resulting log are deterministic.
fn archive_documents(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut documents: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| {
            let path = entry
                .map_err(|e| tracing::error!("{} {:?}", folder.display(), &e))
                .ok()?
                .path();
            if !path.is_file() {
                return None;
            }
            match path.extension().and_then(|e| e.to_str()) {
                Some(SOURCE_EXTENSION) => Some(path),
                _ => None,
            }
        })
        .collect();
    documents.sort();
    Ok(documents)
}

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// The path where the Markdown archive documents are
    pub archive_folder: PathBuf,
    /// The root below which the year folders and text files are written
    pub output_folder: PathBuf,
}

impl Config {
    pub fn new<A: AsRef<Path>>(archive_folder: A, output_folder: A) -> Self {
        Config {
            archive_folder: archive_folder.as_ref().to_path_buf(),
            output_folder: output_folder.as_ref().to_path_buf(),
        }
    }
}

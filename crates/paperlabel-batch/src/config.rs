//! Runtime configuration for a labeling run

use std::path::PathBuf;

/// Everything the batch runner needs for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Folder holding the input PDFs; the report is written next to them
    pub folder: PathBuf,
    /// Report file name inside the input folder
    pub output_name: String,
    /// Fixed ordered candidate category list
    pub categories: Vec<String>,
}

impl RunConfig {
    pub fn report_path(&self) -> PathBuf {
        self.folder.join(&self.output_name)
    }
}

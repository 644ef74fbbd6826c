use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator block between the probe report and the battery status:
/// a rule of 83 dashes with a blank line on each side.
pub fn section_separator() -> Vec<u8> {
    format!("\n\n{}\n\n", "-".repeat(83)).into_bytes()
}

/// One run's report file. Created empty, then appended to in order;
/// tool output goes in as raw bytes, untouched.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    /// Create the report file, empty.
    pub fn create(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        std::fs::File::create(&path).map_err(|source| Error::ReportCreate {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    pub fn append(&self, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::ReportAppend {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(bytes).map_err(|source| Error::ReportAppend {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the assembled report back for display.
    pub fn read_back(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|source| Error::ReportRead {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

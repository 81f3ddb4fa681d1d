use crate::license_check::domain::SbomDocument;
use crate::ports::outbound::SbomReader;
use crate::shared::error::SbomError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM documents from the file system
///
/// This adapter implements the SbomReader port, reading CycloneDX JSON
/// files and deserializing the parts the license check needs.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file as UTF-8 text after checking it is an existing regular
    /// file within the size limit
    pub(crate) fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_input_file(path)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        let content = self.safe_read_file(path)?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

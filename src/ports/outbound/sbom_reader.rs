use crate::license_check::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading SBOM documents
///
/// This port abstracts the file system operations needed to read and
/// deserialize a CycloneDX JSON document.
pub trait SbomReader {
    /// Reads and parses the SBOM at the specified path
    ///
    /// # Arguments
    /// * `path` - Absolute path to the SBOM file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid JSON or does not match the expected shape
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument>;
}

use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum SBOM file size (100 MB)
/// Prevents a runaway document from being slurped into memory
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path refers to an existing regular file
///
/// Symbolic links are followed: an SBOM published through a symlink is
/// checked as the file it points to.
///
/// # Errors
/// Returns `SbomError::InputNotFound` if nothing exists at the path, or if
/// what exists there is not a regular file.
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|_| SbomError::InputNotFound {
        path: path.to_path_buf(),
    })?;

    if !metadata.is_file() {
        return Err(SbomError::InputNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Arguments
/// * `file_size` - The size of the file in bytes
/// * `path` - The path to the file (for error messages)
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

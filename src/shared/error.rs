use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Violations are reported, not signalled: a run that finds unapproved
/// licenses still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report printed (with or without violations), or help/version shown
    Success = 0,
    /// Usage error, missing input file, or unreadable/malformed input
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Application-specific errors for the license check.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Missing required argument: {argument}\n\n💡 Hint: {usage}")]
    MissingArgument { argument: String, usage: String },

    #[error("One or both input files do not exist: {path}\n\n💡 Hint: Please verify the path passed to --sbom / --baseline-sbom")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Error reading or parsing SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid CycloneDX JSON document")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Baseline SBOM has no 'components' field: {path}\n\n💡 Hint: The baseline must be a CycloneDX JSON document with a top-level 'components' array")]
    BaselineMissingComponents { path: PathBuf },

    #[error("Allow-list is unusable: {details}\n\n💡 Hint: The allow-list must list one license identifier per line")]
    AllowListError { details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

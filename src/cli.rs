use anyhow::Context;
use clap::Parser;
use sbom_license_check::application::dto::CheckRequest;
use sbom_license_check::shared::error::SbomError;
use sbom_license_check::shared::Result;
use std::path::{Path, PathBuf};

/// One-line usage shown when the required SBOM path is missing
pub const USAGE: &str = "Usage: sbom-license-check --sbom <path> [--baseline-sbom <path>]";

/// Report SBOM components whose license is not on the approved allow-list
#[derive(Parser, Debug)]
#[command(name = "sbom-license-check")]
#[command(version)]
#[command(
    about = "Report SBOM components whose license is not on the approved allow-list",
    long_about = None
)]
pub struct Args {
    /// Path to the CycloneDX JSON SBOM to check (required)
    #[arg(short = 's', long = "sbom", value_name = "PATH")]
    pub sbom: Option<String>,

    /// Path to a baseline CycloneDX JSON SBOM; components it already
    /// contains (matched by purl) are not reported
    #[arg(
        short = 'b',
        long = "baseline-sbom",
        alias = "baselineSBOM",
        value_name = "PATH"
    )]
    pub baseline_sbom: Option<String>,
}

impl Args {
    /// Parses the process arguments, leaving exit-code policy to the caller
    pub fn try_parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Converts the arguments into a request with absolute paths
    ///
    /// # Errors
    /// Returns `SbomError::MissingArgument` if `--sbom` was not given or is empty.
    /// An empty `--baseline-sbom` is the same as leaving it out.
    pub fn into_request(self) -> Result<CheckRequest> {
        let sbom = self
            .sbom
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SbomError::MissingArgument {
                argument: "--sbom".to_string(),
                usage: USAGE.to_string(),
            })?;

        let baseline = self
            .baseline_sbom
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(resolve_path)
            .transpose()?;

        CheckRequest::builder()
            .sbom_path(resolve_path(&sbom)?)
            .maybe_baseline_path(baseline)
            .build()
    }
}

/// Resolves a command-line path against the current directory
///
/// The path does not need to exist; existence is checked separately.
fn resolve_path(path: &str) -> Result<PathBuf> {
    std::path::absolute(Path::new(path))
        .with_context(|| format!("Failed to resolve path: {}", path))
}

use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// CheckRequest - validated run configuration for the license check use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    /// SBOM whose components are checked
    pub sbom_path: PathBuf,
    /// Previously accepted SBOM; components it contains (by purl) are skipped
    pub baseline_path: Option<PathBuf>,
}

impl CheckRequest {
    pub fn new(sbom_path: PathBuf, baseline_path: Option<PathBuf>) -> Self {
        Self {
            sbom_path,
            baseline_path,
        }
    }

    pub fn builder() -> CheckRequestBuilder {
        CheckRequestBuilder::default()
    }

    /// Every input path of the request, primary first
    pub fn input_paths(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.sbom_path).chain(self.baseline_path.iter())
    }
}

/// Builder for [`CheckRequest`]
#[derive(Debug, Default)]
pub struct CheckRequestBuilder {
    sbom_path: Option<PathBuf>,
    baseline_path: Option<PathBuf>,
}

impl CheckRequestBuilder {
    pub fn sbom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sbom_path = Some(path.into());
        self
    }

    pub fn baseline_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.baseline_path = Some(path.into());
        self
    }

    pub fn maybe_baseline_path(mut self, path: Option<PathBuf>) -> Self {
        self.baseline_path = path;
        self
    }

    /// # Errors
    /// Returns `SbomError::Validation` if no SBOM path was set
    pub fn build(self) -> Result<CheckRequest> {
        let sbom_path = self.sbom_path.ok_or_else(|| SbomError::Validation {
            message: "sbom_path is required".to_string(),
        })?;

        Ok(CheckRequest::new(sbom_path, self.baseline_path))
    }
}

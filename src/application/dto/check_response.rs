use crate::license_check::domain::Component;

/// CheckResponse - outcome of a license check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResponse {
    /// Components with at least one unapproved license, in SBOM order
    pub violations: Vec<Component>,
    /// Number of components in the primary SBOM
    pub total_components: usize,
    /// Number of components skipped because the baseline already contains them
    pub excluded_by_baseline: usize,
}

impl CheckResponse {
    pub fn new(
        violations: Vec<Component>,
        total_components: usize,
        excluded_by_baseline: usize,
    ) -> Self {
        Self {
            violations,
            total_components,
            excluded_by_baseline,
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

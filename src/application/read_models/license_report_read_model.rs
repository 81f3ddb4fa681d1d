//! Read model for the license report

use super::violation_view::ViolationView;

/// Read model handed to report formatters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseReportReadModel {
    /// One row per violating component, in SBOM order
    pub violations: Vec<ViolationView>,
}

impl LicenseReportReadModel {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

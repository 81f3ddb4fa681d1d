//! Builder for constructing LicenseReportReadModel from domain objects

use super::license_report_read_model::LicenseReportReadModel;
use super::violation_view::{ViolationView, NOT_AVAILABLE, UNKNOWN_LICENSE};
use crate::license_check::domain::Component;

/// Transforms violating components into report rows
pub struct LicenseReportReadModelBuilder;

impl LicenseReportReadModelBuilder {
    pub fn build(violations: &[Component]) -> LicenseReportReadModel {
        LicenseReportReadModel {
            violations: violations.iter().map(Self::build_view).collect(),
        }
    }

    fn build_view(component: &Component) -> ViolationView {
        ViolationView {
            name: component.name().unwrap_or(NOT_AVAILABLE).to_string(),
            purl: component.purl().unwrap_or(NOT_AVAILABLE).to_string(),
            licenses: Self::join_licenses(component),
            location: component.location().unwrap_or(NOT_AVAILABLE).to_string(),
        }
    }

    fn join_licenses(component: &Component) -> String {
        component
            .licenses()
            .iter()
            .map(|license| license.id().unwrap_or(UNKNOWN_LICENSE))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

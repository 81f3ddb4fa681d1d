use crate::application::read_models::LicenseReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the license report
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Arguments
    /// * `model` - Rows for every component with an unapproved license
    ///
    /// # Returns
    /// The rendered report, or the all-clear message when there are no rows
    fn format(&self, model: &LicenseReportReadModel) -> Result<String>;
}

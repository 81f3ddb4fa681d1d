use crate::application::dto::{CheckRequest, CheckResponse};
use crate::shared::Result;

/// LicenseCheckPort - driving port for running a license compliance check
///
/// The CLI depends on this trait rather than on the concrete use case.
pub trait LicenseCheckPort {
    /// Loads the inputs named by `request`, filters them, and returns the violations
    fn check(&self, request: CheckRequest) -> Result<CheckResponse>;
}

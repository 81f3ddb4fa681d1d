//! sbom-license-check - License compliance check for CycloneDX SBOMs
//!
//! This library compares the components of an SBOM against an allow-list of
//! approved license identifiers and reports every component that declares a
//! license outside it. Components already present in a baseline SBOM can be
//! left out of the report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_check`): SBOM model, allow-list and the pure filters
//! - **Application Layer** (`application`): Use case, DTOs and report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_license_check::prelude::*;
//! use sbom_license_check::application::read_models::LicenseReportReadModelBuilder;
//!
//! # fn main() -> Result<()> {
//! let use_case = CheckLicensesUseCase::new(
//!     FileSystemReader::new(),
//!     BundledAllowList::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CheckRequest::builder()
//!     .sbom_path("/path/to/sbom.json")
//!     .baseline_path("/path/to/baseline.json")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let model = LicenseReportReadModelBuilder::build(&response.violations);
//! println!("{}", TableFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_check;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::bundled::BundledAllowList;
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::{FileAllowList, FileSystemReader};
    pub use crate::adapters::outbound::formatters::TableFormatter;
    pub use crate::application::dto::{CheckRequest, CheckResponse};
    pub use crate::application::use_cases::CheckLicensesUseCase;
    pub use crate::license_check::domain::{AllowList, Component, LicenseChoice, SbomDocument};
    pub use crate::license_check::services::{BaselineFilter, LicensePolicy};
    pub use crate::ports::inbound::LicenseCheckPort;
    pub use crate::ports::outbound::{
        AllowListProvider, OutputPresenter, ProgressReporter, ReportFormatter, SbomReader,
    };
    pub use crate::shared::Result;
}

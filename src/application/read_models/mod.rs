//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod license_report_read_model;
pub mod license_report_read_model_builder;
pub mod violation_view;

pub use license_report_read_model::LicenseReportReadModel;
pub use license_report_read_model_builder::LicenseReportReadModelBuilder;
pub use violation_view::{ViolationView, NOT_AVAILABLE, UNKNOWN_LICENSE};

pub mod baseline_filter;
pub mod license_policy;

pub use baseline_filter::BaselineFilter;
pub use license_policy::LicensePolicy;

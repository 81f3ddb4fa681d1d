pub mod allow_list;
pub mod component;
pub mod sbom_document;

pub use allow_list::AllowList;
pub use component::{Component, LicenseChoice, Property, SYFT_LOCATION_PROPERTY};
pub use sbom_document::SbomDocument;

/// Domain layer - the SBOM model and the pure filtering rules of the check
pub mod domain;
pub mod services;

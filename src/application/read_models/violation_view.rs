//! Row view for a component that violates the license allow-list
//!
//! Display defaults for absent data live here, so the formatter only deals
//! with ready-to-print strings.

/// Placeholder shown for an absent name, purl or location
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for a license entry without an identifier
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// View representation of one report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationView {
    /// Component name, or `N/A`
    pub name: String,
    /// Package URL, or `N/A`
    pub purl: String,
    /// Comma-joined license identifiers; empty if the component lists none
    pub licenses: String,
    /// Syft filesystem location, or `N/A`
    pub location: String,
}

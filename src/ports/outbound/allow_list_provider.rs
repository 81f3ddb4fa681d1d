use crate::license_check::domain::AllowList;
use crate::shared::Result;

/// AllowListProvider port for obtaining the approved license identifiers
///
/// Production code uses the list bundled into the binary; tests and library
/// callers can inject their own.
pub trait AllowListProvider {
    /// Loads the allow-list
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn load_allow_list(&self) -> Result<AllowList>;
}

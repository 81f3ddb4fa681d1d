use crate::license_check::domain::AllowList;
use crate::ports::outbound::AllowListProvider;
use crate::shared::Result;

/// Allow-list shipped with the tool, loosely based on
/// <https://docs.fedoraproject.org/en-US/legal/allowed-licenses/>
const ALLOWED_LICENSES: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/ALLOWED_LICENSES.txt"
));

/// BundledAllowList adapter serving the allow-list compiled into the binary
pub struct BundledAllowList;

impl BundledAllowList {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BundledAllowList {
    fn default() -> Self {
        Self::new()
    }
}

impl AllowListProvider for BundledAllowList {
    fn load_allow_list(&self) -> Result<AllowList> {
        Ok(AllowList::parse(ALLOWED_LICENSES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_allow_list_loads() {
        let allow_list = BundledAllowList::new().load_allow_list().unwrap();
        assert!(!allow_list.is_empty());
    }

    #[test]
    fn test_bundled_allow_list_contents() {
        let allow_list = BundledAllowList::new().load_allow_list().unwrap();
        assert!(allow_list.contains("MIT"));
        assert!(allow_list.contains("Apache-2.0"));
        assert!(allow_list.contains("BSD-3-Clause"));
        assert!(!allow_list.contains("GPL-3.0-only"));
        assert!(!allow_list.contains("AGPL-3.0-only"));
    }

    #[test]
    fn test_bundled_allow_list_entries_are_trimmed() {
        let allow_list = BundledAllowList::new().load_allow_list().unwrap();
        assert!(allow_list
            .ids()
            .iter()
            .all(|id| !id.is_empty() && id.trim() == id));
    }
}

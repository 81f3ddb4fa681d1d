use sbom_license_check::prelude::*;

/// Mock AllowListProvider returning a fixed set of identifiers
pub struct MockAllowListProvider {
    ids: Vec<String>,
}

impl MockAllowListProvider {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl AllowListProvider for MockAllowListProvider {
    fn load_allow_list(&self) -> Result<AllowList> {
        Ok(AllowList::from_ids(self.ids.iter().cloned()))
    }
}

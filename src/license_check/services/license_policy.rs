use crate::license_check::domain::{AllowList, Component, LicenseChoice};

/// LicensePolicy - decides which components violate the allow-list
///
/// A license entry is unapproved when it declares an identifier that is not
/// on the allow-list. Entries without an identifier are never unapproved, so
/// a component with no licenses (or only unidentified ones) always passes.
#[derive(Debug, Clone, Copy)]
pub struct LicensePolicy<'a> {
    allow_list: &'a AllowList,
}

impl<'a> LicensePolicy<'a> {
    pub fn new(allow_list: &'a AllowList) -> Self {
        Self { allow_list }
    }

    pub fn is_unapproved(&self, license: &LicenseChoice) -> bool {
        license
            .id()
            .is_some_and(|id| !self.allow_list.contains(id))
    }

    pub fn has_unapproved_license(&self, component: &Component) -> bool {
        component
            .licenses()
            .iter()
            .any(|license| self.is_unapproved(license))
    }

    /// Returns the components carrying at least one unapproved license, in input order
    pub fn retain_unapproved<'c, I>(&self, components: I) -> Vec<&'c Component>
    where
        I: IntoIterator<Item = &'c Component>,
    {
        components
            .into_iter()
            .filter(|component| self.has_unapproved_license(component))
            .collect()
    }
}

use crate::license_check::domain::Component;
use std::collections::HashSet;

/// BaselineFilter - drops components already present in a baseline SBOM
///
/// Identity is the component's package URL, compared as an exact string.
/// Components without a purl can never match and always pass through.
#[derive(Debug)]
pub struct BaselineFilter<'b> {
    known_purls: HashSet<&'b str>,
}

impl<'b> BaselineFilter<'b> {
    /// Creates a filter from the components of the baseline document
    pub fn new(baseline: &'b [Component]) -> Self {
        Self {
            known_purls: baseline.iter().filter_map(Component::purl).collect(),
        }
    }

    /// Returns the components that are not part of the baseline, in input order
    pub fn filter<'a, I>(&self, components: I) -> Vec<&'a Component>
    where
        I: IntoIterator<Item = &'a Component>,
    {
        components
            .into_iter()
            .filter(|component| !self.is_known(component))
            .collect()
    }

    fn is_known(&self, component: &Component) -> bool {
        component
            .purl()
            .is_some_and(|purl| self.known_purls.contains(purl))
    }

    /// Number of distinct purls recorded in the baseline
    pub fn known_purl_count(&self) -> usize {
        self.known_purls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, purl: Option<&str>) -> Component {
        Component::new(Some(name.to_string()), purl.map(str::to_string))
    }

    #[test]
    fn test_excludes_components_present_in_baseline() {
        let baseline = vec![component("foo", Some("pkg:npm/foo@1.0.0"))];
        let current = vec![
            component("foo", Some("pkg:npm/foo@1.0.0")),
            component("bar", Some("pkg:npm/bar@2.0.0")),
        ];

        let filter = BaselineFilter::new(&baseline);
        let result = filter.filter(&current);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), Some("bar"));
    }

    #[test]
    fn test_version_bump_is_not_excluded() {
        let baseline = vec![component("foo", Some("pkg:npm/foo@1.0.0"))];
        let current = vec![component("foo", Some("pkg:npm/foo@1.0.1"))];

        let result = BaselineFilter::new(&baseline).filter(&current);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_component_without_purl_is_never_excluded() {
        // A purl-less baseline entry must not shadow purl-less current entries
        let baseline = vec![component("anon", None)];
        let current = vec![component("anon", None)];

        let filter = BaselineFilter::new(&baseline);
        assert_eq!(filter.known_purl_count(), 0);
        assert_eq!(filter.filter(&current).len(), 1);
    }

    #[test]
    fn test_purl_comparison_is_exact() {
        let baseline = vec![component("foo", Some("pkg:npm/Foo@1.0.0"))];
        let current = vec![component("foo", Some("pkg:npm/foo@1.0.0"))];

        assert_eq!(BaselineFilter::new(&baseline).filter(&current).len(), 1);
    }

    #[test]
    fn test_preserves_order() {
        let baseline = vec![component("b", Some("pkg:b"))];
        let current = vec![
            component("d", Some("pkg:d")),
            component("b", Some("pkg:b")),
            component("a", None),
            component("c", Some("pkg:c")),
        ];

        let names: Vec<_> = BaselineFilter::new(&baseline)
            .filter(&current)
            .iter()
            .filter_map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["d", "a", "c"]);
    }

    #[test]
    fn test_empty_baseline_keeps_everything() {
        let current = vec![component("a", Some("pkg:a")), component("b", None)];
        assert_eq!(BaselineFilter::new(&[]).filter(&current).len(), 2);
    }
}

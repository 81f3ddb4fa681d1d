use std::collections::HashSet;

/// AllowList value object - the license identifiers approved for use
///
/// Built once from a line-oriented source and never modified afterwards.
/// Order of first appearance is kept; blank lines and repeated identifiers
/// are dropped. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    ids: Vec<String>,
    index: HashSet<String>,
}

impl AllowList {
    /// Parses a newline-separated list of license identifiers
    ///
    /// Each line is trimmed; empty lines are ignored.
    pub fn parse(content: &str) -> Self {
        Self::from_ids(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Creates an allow-list from already-split identifiers
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allow_list = Self::default();
        for id in ids {
            let id = id.into();
            if allow_list.index.insert(id.clone()) {
                allow_list.ids.push(id);
            }
        }
        allow_list
    }

    pub fn contains(&self, license_id: &str) -> bool {
        self.index.contains(license_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let allow_list = AllowList::parse("MIT\n\n  Apache-2.0  \n\t\nISC\n");
        assert_eq!(allow_list.ids(), &["MIT", "Apache-2.0", "ISC"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let allow_list = AllowList::parse("MIT\r\nBSD-3-Clause\r\n");
        assert!(allow_list.contains("MIT"));
        assert!(allow_list.contains("BSD-3-Clause"));
        assert_eq!(allow_list.len(), 2);
    }

    #[test]
    fn test_parse_drops_duplicates_keeping_first_position() {
        let allow_list = AllowList::parse("MIT\nISC\nMIT\nZlib\nISC");
        assert_eq!(allow_list.ids(), &["MIT", "ISC", "Zlib"]);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let allow_list = AllowList::from_ids(["MIT"]);
        assert!(allow_list.contains("MIT"));
        assert!(!allow_list.contains("mit"));
        assert!(!allow_list.contains("MIT "));
    }

    #[test]
    fn test_empty_input() {
        let allow_list = AllowList::parse("\n   \n");
        assert!(allow_list.is_empty());
        assert_eq!(allow_list.len(), 0);
        assert!(!allow_list.contains(""));
    }
}

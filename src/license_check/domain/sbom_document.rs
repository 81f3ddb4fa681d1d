use super::Component;
use serde::Deserialize;

/// SbomDocument - the parts of a CycloneDX JSON document the check reads
///
/// `bomFormat`, `metadata`, `dependencies` and every other top-level field
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SbomDocument {
    components: Option<Vec<Component>>,
}

impl SbomDocument {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components: Some(components),
        }
    }

    /// A document whose top-level `components` field is absent
    pub fn without_components() -> Self {
        Self { components: None }
    }

    /// Components of the document; a missing `components` field reads as empty
    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or_default()
    }

    /// Components of the document, or `None` if the field is absent
    pub fn declared_components(&self) -> Option<&[Component]> {
        self.components.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let document: SbomDocument = serde_json::from_str(
            r#"{
                "bomFormat": "CycloneDX",
                "specVersion": "1.5",
                "metadata": { "component": { "name": "app" } },
                "components": [ { "name": "foo" }, { "name": "bar" } ],
                "dependencies": []
            }"#,
        )
        .unwrap();

        assert_eq!(document.components().len(), 2);
        assert_eq!(document.components()[1].name(), Some("bar"));
    }

    #[test]
    fn test_missing_components_field() {
        let document: SbomDocument = serde_json::from_str(r#"{ "bomFormat": "CycloneDX" }"#).unwrap();
        assert!(document.components().is_empty());
        assert!(document.declared_components().is_none());
        assert_eq!(document, SbomDocument::without_components());
    }

    #[test]
    fn test_empty_components_field_is_declared() {
        let document: SbomDocument = serde_json::from_str(r#"{ "components": [] }"#).unwrap();
        assert_eq!(document.declared_components(), Some(&[][..]));
    }

    #[test]
    fn test_components_must_be_an_array() {
        let result = serde_json::from_str::<SbomDocument>(r#"{ "components": "nope" }"#);
        assert!(result.is_err());
    }
}

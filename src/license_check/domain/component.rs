use serde::Deserialize;

/// Property name Syft uses for the first filesystem location of a component
pub const SYFT_LOCATION_PROPERTY: &str = "syft:location:0:path";

/// Component - a single CycloneDX component entry
///
/// Only the attributes needed for the license check are modelled; any other
/// field in the document is ignored during deserialization. Every attribute
/// is optional and a JSON `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Component {
    name: Option<String>,
    purl: Option<String>,
    licenses: Option<Vec<LicenseChoice>>,
    properties: Option<Vec<Property>>,
}

impl Component {
    pub fn new(name: Option<String>, purl: Option<String>) -> Self {
        Self {
            name,
            purl,
            licenses: None,
            properties: None,
        }
    }

    /// Appends a license entry carrying the given SPDX identifier
    pub fn with_license_id(mut self, id: impl Into<String>) -> Self {
        self.licenses
            .get_or_insert_with(Vec::new)
            .push(LicenseChoice::with_id(id));
        self
    }

    /// Appends a license entry without an identifier (name-only or expression)
    pub fn with_unidentified_license(mut self) -> Self {
        self.licenses
            .get_or_insert_with(Vec::new)
            .push(LicenseChoice::default());
        self
    }

    /// Sets an explicitly empty license list
    pub fn with_no_licenses(mut self) -> Self {
        self.licenses = Some(Vec::new());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(Property {
            name: Some(name.into()),
            value: Some(value.into()),
        });
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    /// License entries; an absent `licenses` field reads as an empty list
    pub fn licenses(&self) -> &[LicenseChoice] {
        self.licenses.as_deref().unwrap_or_default()
    }

    pub fn properties(&self) -> &[Property] {
        self.properties.as_deref().unwrap_or_default()
    }

    /// Value of the first property with the given name
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties()
            .iter()
            .find(|p| p.name() == Some(name))
            .and_then(Property::value)
    }

    /// Filesystem location recorded by Syft, if any
    pub fn location(&self) -> Option<&str> {
        self.property(SYFT_LOCATION_PROPERTY)
    }
}

/// One entry of a component's `licenses` array: `{ "license": { "id": ... } }`
///
/// Entries of the `{ "expression": ... }` form have no `license` object and
/// therefore no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LicenseChoice {
    license: Option<License>,
}

impl LicenseChoice {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            license: Some(License {
                id: Some(id.into()),
                name: None,
            }),
        }
    }

    /// SPDX identifier of this entry, if it declares one; an empty id counts as none
    pub fn id(&self) -> Option<&str> {
        self.license
            .as_ref()
            .and_then(|l| l.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Free-form license name, if any
    pub fn name(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct License {
    id: Option<String>,
    name: Option<String>,
}

/// Name/value pair from a component's `properties` array
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Property {
    name: Option<String>,
    value: Option<String>,
}

impl Property {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

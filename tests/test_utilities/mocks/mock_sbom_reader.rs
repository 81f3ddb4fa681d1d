use sbom_license_check::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock SbomReader serving in-memory JSON documents keyed by path
#[derive(Default)]
pub struct MockSbomReader {
    documents: HashMap<PathBuf, String>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, json: &str) -> Self {
        self.documents.insert(PathBuf::from(path), json.to_string());
        self
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument> {
        let json = self
            .documents
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Mock: no document registered for {}", path.display()))?;
        Ok(serde_json::from_str(json)?)
    }
}

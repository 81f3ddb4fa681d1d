use super::FileSystemReader;
use crate::license_check::domain::AllowList;
use crate::ports::outbound::AllowListProvider;
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// FileAllowList adapter for loading an allow-list from a text file
///
/// The file uses the same format as the bundled list: one license
/// identifier per line.
pub struct FileAllowList {
    path: PathBuf,
    reader: FileSystemReader,
}

impl FileAllowList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reader: FileSystemReader::new(),
        }
    }
}

impl AllowListProvider for FileAllowList {
    fn load_allow_list(&self) -> Result<AllowList> {
        let content = self
            .reader
            .safe_read_file(&self.path)
            .with_context(|| format!("Failed to load allow-list: {}", self.path.display()))?;
        Ok(AllowList::parse(&content))
    }
}

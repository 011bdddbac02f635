use std::path::{Path, PathBuf};

use super::ResourceProvider;
use crate::Result;

/// A manifest file with both raw content and parsed provider.
///
/// Keeping the raw content around lets later diagnostics point back into
/// the source text.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    provider: ResourceProvider,
}

impl ManifestFile {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let provider = ResourceProvider::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            provider,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed provider.
    pub fn provider(&self) -> &ResourceProvider {
        &self.provider
    }
}

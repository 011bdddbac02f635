//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{ResourceProvider, validate};
use crate::{Error, Result, error::SourceContext};

impl FromStr for ResourceProvider {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "manifest.yaml")
    }
}

impl ResourceProvider {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<ResourceProvider> {
    let source_ctx = SourceContext::new(content, filename);
    let provider: ResourceProvider =
        serde_yaml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_provider(&provider, &source_ctx)?;
    Ok(provider)
}

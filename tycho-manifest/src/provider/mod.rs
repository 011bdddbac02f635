//! Resource-provider manifest model and parsing.

mod file;
mod parse;
mod validate;

pub use file::ManifestFile;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::schema::Schema;

/// Root of a resource-provider manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceProvider {
    /// Provider namespace, e.g. `Applications.Test`.
    pub name: String,

    /// Resource types by name, in source order.
    pub types: IndexMap<String, ResourceType>,
}

/// A resource type and its API versions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceType {
    /// The version tooling should pick when the author names none.
    #[serde(rename = "defaultApiVersion")]
    pub default_api_version: Option<String>,

    /// API versions by name, in source order.
    #[serde(rename = "apiVersions")]
    pub api_versions: IndexMap<String, ApiVersion>,
}

/// One API version of a resource type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiVersion {
    /// The shape of the resource's `properties` body.
    pub schema: Schema,

    /// Capability tags, carried through but not consumed by conversion.
    pub capabilities: Option<Vec<String>>,
}

impl ResourceProvider {
    /// Check if a resource type is declared.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Total number of (resource type, API version) pairs.
    pub fn version_count(&self) -> usize {
        self.types
            .values()
            .map(|resource_type| resource_type.api_versions.len())
            .sum()
    }
}

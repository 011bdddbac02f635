//! Machine-readable artifact writers: the raw type dump and the resource
//! index.

use indexmap::IndexMap;
use serde::Serialize;

use crate::factory::TypeFactory;
use crate::types::{Type, TypeRef};

/// The resource index: a map from qualified resource-type name to its
/// descriptor reference, plus artifact metadata.
#[derive(Debug, Serialize)]
pub struct TypeIndex {
    /// Index name, derived from the provider name (lowercased, dots
    /// removed).
    pub name: String,
    /// Artifact format version.
    pub version: String,
    /// Qualified resource name → resource descriptor reference, in
    /// conversion order.
    pub resources: IndexMap<String, TypeRef>,
}

impl TypeIndex {
    /// Format version of emitted indexes.
    pub const VERSION: &'static str = "0.0.1";

    /// Build the index for a converted manifest.
    ///
    /// Non-resource references are skipped; conversion only hands over
    /// resource descriptors here.
    pub fn build(provider_name: &str, resources: &[TypeRef], factory: &TypeFactory) -> Self {
        let mut index = IndexMap::with_capacity(resources.len());
        for &reference in resources {
            if let Type::Resource(descriptor) = factory.get(reference) {
                index.insert(descriptor.name.clone(), reference);
            }
        }
        Self {
            name: provider_name.to_lowercase().replace('.', ""),
            version: Self::VERSION.to_string(),
            resources: index,
        }
    }
}

/// Serialize the full descriptor set as pretty JSON.
pub fn write_types_json(types: &[Type]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(types)
}

/// Serialize the resource index as pretty JSON.
pub fn write_index_json(index: &TypeIndex) -> serde_json::Result<String> {
    serde_json::to_string_pretty(index)
}

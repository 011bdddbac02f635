//! Check operation - manifest summary after a successful conversion.

use std::path::Path;

use tycho_manifest::ResourceProvider;

use crate::reports::{CheckReport, ResourceTypeSummary};

/// Build the check report for a provider whose conversion succeeded.
pub fn check(manifest_path: &Path, provider: &ResourceProvider) -> CheckReport {
    let resource_types = provider
        .types
        .iter()
        .map(|(name, resource_type)| ResourceTypeSummary {
            name: name.clone(),
            versions: resource_type.api_versions.keys().cloned().collect(),
        })
        .collect();

    CheckReport {
        manifest_path: manifest_path.to_path_buf(),
        provider_name: provider.name.clone(),
        resource_types,
    }
}

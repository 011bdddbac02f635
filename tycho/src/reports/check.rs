//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest file.
    pub manifest_path: PathBuf,

    /// Provider namespace.
    pub provider_name: String,

    /// Resource types with their API versions.
    pub resource_types: Vec<ResourceTypeSummary>,
}

/// One resource type and its declared versions.
#[derive(Debug)]
pub struct ResourceTypeSummary {
    pub name: String,
    pub versions: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        out.newline();
        out.preformatted(&format!("  {}", self.provider_name));

        let count = self.resource_types.len();
        out.section(&format!(
            "  {} resource type{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for resource_type in &self.resource_types {
            out.list_item(&format!(
                "{} ({})",
                resource_type.name,
                resource_type.versions.join(", ")
            ));
        }
    }
}

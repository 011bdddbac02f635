//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Provider namespace from the manifest.
    pub provider_name: String,

    /// Number of (resource type, API version) pairs converted.
    pub resource_type_count: usize,

    /// Total descriptors created during the pass.
    pub descriptor_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of artifact generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview { artifacts: Vec<Artifact> },
}

/// A single generated artifact.
#[derive(Debug)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub name: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "{} ({} resource type{}, {} descriptor{})",
            self.provider_name,
            self.resource_type_count,
            if self.resource_type_count == 1 { "" } else { "s" },
            self.descriptor_count,
            if self.descriptor_count == 1 { "" } else { "s" },
        ));
        out.newline();

        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                out.key_value("Generated", &output_dir.display().to_string());
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview { artifacts } => {
                for artifact in artifacts {
                    out.divider(&artifact.name);
                    out.preformatted(&artifact.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated",
                    artifacts.len()
                ));
            }
        }
    }
}

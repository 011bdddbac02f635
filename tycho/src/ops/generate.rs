//! Generate operation - artifact emission from a converted manifest.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use tycho_manifest::ResourceProvider;
use tycho_types::{
    TypeFactory, TypeIndex, TypeRef, write_index_json, write_index_markdown, write_types_json,
};

use crate::reports::{Artifact, GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated artifacts.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Builds the three artifacts from an already-converted manifest and
/// writes them into the output directory (or previews them on dry-run).
pub fn generate(
    provider: &ResourceProvider,
    factory: &TypeFactory,
    resource_types: &[TypeRef],
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let index = TypeIndex::build(&provider.name, resource_types, factory);

    let artifacts = vec![
        Artifact {
            name: "types.json".to_string(),
            content: write_types_json(factory.types())
                .wrap_err("Failed to serialize type dump")?,
        },
        Artifact {
            name: "index.json".to_string(),
            content: write_index_json(&index).wrap_err("Failed to serialize index")?,
        },
        Artifact {
            name: "index.md".to_string(),
            content: write_index_markdown(&index, factory),
        },
    ];

    let result = if opts.dry_run {
        GenerationResult::Preview { artifacts }
    } else {
        fs::create_dir_all(opts.output_dir).wrap_err_with(|| {
            format!("Failed to create '{}'", opts.output_dir.display())
        })?;
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = opts.output_dir.join(&artifact.name);
            fs::write(&path, &artifact.content)
                .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
            written.push(path);
        }
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            files: written,
        }
    };

    Ok(GenerateReport {
        provider_name: provider.name.clone(),
        resource_type_count: resource_types.len(),
        descriptor_count: factory.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tycho_convert::convert_manifest;

    use super::*;

    const MANIFEST: &str = r#"
        name: Applications.Test
        types:
          testResources:
            apiVersions:
              '2021-01-01':
                schema:
                  type: object
                  properties:
                    a: { type: string }
                    b: { type: string }
    "#;

    fn converted() -> (ResourceProvider, TypeFactory, Vec<TypeRef>) {
        let provider = ResourceProvider::from_str(MANIFEST).expect("failed to parse manifest");
        let mut factory = TypeFactory::new();
        let resource_types =
            convert_manifest(&provider, &mut factory).expect("conversion failed");
        (provider, factory, resource_types)
    }

    #[test]
    fn test_generate_writes_artifacts() {
        let (provider, factory, resource_types) = converted();
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let output_dir = dir.path().join("types");

        let report = generate(
            &provider,
            &factory,
            &resource_types,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: false,
            },
        )
        .expect("generate failed");

        assert_eq!(report.provider_name, "Applications.Test");
        assert_eq!(report.resource_type_count, 1);

        let index: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(output_dir.join("index.json")).expect("index.json missing"),
        )
        .expect("index.json is not valid JSON");
        assert_eq!(index["name"], "applicationstest");
        assert!(
            index["resources"]
                .get("Applications.Test/testResources@2021-01-01")
                .is_some()
        );

        let types: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(output_dir.join("types.json")).expect("types.json missing"),
        )
        .expect("types.json is not valid JSON");
        assert_eq!(types.as_array().unwrap().len(), factory.len());

        let markdown =
            fs::read_to_string(output_dir.join("index.md")).expect("index.md missing");
        assert!(markdown.contains("## Resource Applications.Test/testResources@2021-01-01"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (provider, factory, resource_types) = converted();
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let output_dir = dir.path().join("types");

        let report = generate(
            &provider,
            &factory,
            &resource_types,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: true,
            },
        )
        .expect("generate failed");

        assert!(!output_dir.exists());
        let GenerationResult::Preview { artifacts } = &report.result else {
            panic!("expected a preview result");
        };
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["types.json", "index.json", "index.md"]);
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tycho_convert::convert_manifest;
use tycho_manifest::ManifestFile;
use tycho_types::TypeFactory;

use super::UnwrapOrExit;
use crate::ops::{self, GenerateOptions};
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the resource provider manifest
    manifest: PathBuf,

    /// Output directory for generated artifacts
    #[arg(short, long, default_value = "types")]
    output: PathBuf,

    /// Preview the artifacts without writing files
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = ManifestFile::open(&self.manifest).unwrap_or_exit();

        let mut factory = TypeFactory::new();
        let resource_types = convert_manifest(manifest.provider(), &mut factory).unwrap_or_exit();

        let report = ops::generate(
            manifest.provider(),
            &factory,
            &resource_types,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

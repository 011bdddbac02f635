use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tycho_convert::convert_manifest;
use tycho_manifest::ManifestFile;
use tycho_types::TypeFactory;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the resource provider manifest
    manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = ManifestFile::open(&self.manifest).unwrap_or_exit();

        // A throwaway conversion surfaces schema-shape errors without
        // writing anything.
        let mut factory = TypeFactory::new();
        convert_manifest(manifest.provider(), &mut factory).unwrap_or_exit();

        let report = ops::check(manifest.path(), manifest.provider());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

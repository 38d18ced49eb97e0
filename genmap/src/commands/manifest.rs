use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ManifestCommand {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Print the manifest as JSON
    #[arg(long)]
    pub json: bool,
}

impl ManifestCommand {
    pub fn run(&self) -> Result<()> {
        let project = ops::Project::open(&self.dir).unwrap_or_exit();
        let report = ops::manifest(&project).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report.manifest)
                .wrap_err("failed to serialize manifest")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}

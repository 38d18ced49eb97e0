use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LsCommand {
    /// Directory to list, relative to the project
    #[arg(default_value = ".")]
    pub path: String,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,
}

impl LsCommand {
    pub fn run(&self) -> Result<()> {
        let project = ops::Project::open(&self.dir).unwrap_or_exit();
        // Refuse to list a project whose generators don't load
        let manifest = project.load().unwrap_or_exit();

        let report = ops::ls(&project, &manifest, &self.path)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

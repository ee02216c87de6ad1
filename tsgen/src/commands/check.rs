use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsgen_document::Document;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the Swagger 2.0 JSON document
    pub document: PathBuf,

    /// Path to tsgen.toml (defaults to ./tsgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let document = Document::open(&self.document).unwrap_or_exit();
        let config = Config::load(self.config.as_deref())?;
        let strict = self.strict || config.lint.strict;

        let report = ops::check(document, &self.document, strict)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}

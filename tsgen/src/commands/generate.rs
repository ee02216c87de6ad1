use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsgen_codegen_typescript::ErrorStyle;
use tsgen_document::Document;

use super::UnwrapOrExit;
use crate::{
    config::{Config, Overrides, Settings},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the Swagger 2.0 JSON document
    pub document: PathBuf,

    /// Output directory (defaults to `output.dir` from the config, else ./dist)
    #[arg(short, long, env = "TSGEN_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Path to tsgen.toml (defaults to ./tsgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Code placed at the top of every generated file instead of the axios import
    #[arg(long, env = "TSGEN_PREAMBLE")]
    pub preamble: Option<String>,

    /// How generated functions report failures (sentinel or result)
    #[arg(long)]
    pub error_style: Option<ErrorStyle>,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let document = Document::open(&self.document).unwrap_or_exit();
        let config = Config::load(self.config.as_deref())?;
        let settings = Settings::resolve(
            config,
            Overrides {
                output_dir: self.output.clone(),
                preamble: self.preamble.clone(),
                error_style: self.error_style,
                strict: self.strict,
            },
        );

        let report = ops::generate(document, &self.document, &settings, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

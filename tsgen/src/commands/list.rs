use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsgen_document::Document;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the Swagger 2.0 JSON document
    pub document: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let document = Document::open(&self.document).unwrap_or_exit();
        ops::list(&document).render(&mut TerminalOutput::new());
        Ok(())
    }
}

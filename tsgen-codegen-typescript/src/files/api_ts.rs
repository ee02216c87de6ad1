//! `<group>Api.ts` client module generator.

use std::path::{Path, PathBuf};

use tsgen_core::GeneratedFile;

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// One generated client module holding every endpoint of a group.
pub struct ApiTs {
    group: String,
    preamble: Option<String>,
    fragments: Vec<String>,
}

impl ApiTs {
    pub fn new(group: impl Into<String>, fragments: Vec<String>) -> Self {
        Self {
            group: group.into(),
            preamble: None,
            fragments,
        }
    }

    /// Replace the default `import axios from 'axios'` preamble.
    pub fn with_preamble(mut self, preamble: Option<String>) -> Self {
        self.preamble = preamble;
        self
    }

    /// File name of a group's module (e.g. "roleApi.ts").
    pub fn file_name(group: &str) -> String {
        format!("{}Api.ts", group)
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}

impl GeneratedFile for ApiTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(&self.group))
    }

    fn render(&self) -> String {
        let file = match &self.preamble {
            Some(code) => CodeFile::new().preamble(RawCode::new(code.as_str())),
            None => CodeFile::new().import(Import::new("axios").default("axios")),
        };

        file.add_all(self.fragments.iter().map(|f| RawCode::new(f.as_str())))
            .render()
    }
}

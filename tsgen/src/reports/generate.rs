//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the document.
    pub document_path: PathBuf,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub endpoint_count: usize,
    /// Group names with their endpoint counts, in output order.
    pub groups: Vec<(String, usize)>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                out.preformatted(&format!(
                    "{}: {} endpoint{} in {} group{}",
                    self.document_path.display(),
                    self.endpoint_count,
                    plural(self.endpoint_count),
                    self.groups.len(),
                    plural(self.groups.len())
                ));
                out.newline();
                out.section(&format!("Generated ({})", output_dir.display()));
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    plural(files.len())
                ));
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_summary() {
        let report = GenerateReport {
            document_path: PathBuf::from("swagger.json"),
            warnings: vec!["reference to undefined definition 'Page'".into()],
            endpoint_count: 1,
            groups: vec![("role".into(), 1)],
            result: GenerationResult::Written {
                output_dir: PathBuf::from("dist"),
                files: vec![PathBuf::from("dist/roleApi.ts")],
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stderr, vec!["warning: reference to undefined definition 'Page'"]);
        assert_eq!(
            out.stdout,
            vec![
                "swagger.json: 1 endpoint in 1 group",
                "",
                "Generated (dist):",
                "  + dist/roleApi.ts",
            ]
        );
    }

    #[test]
    fn test_preview_summary() {
        let report = GenerateReport {
            document_path: PathBuf::from("swagger.json"),
            warnings: Vec::new(),
            endpoint_count: 2,
            groups: vec![("a".into(), 1), ("b".into(), 1)],
            result: GenerationResult::Preview(vec![
                PreviewFile {
                    path: "aApi.ts".into(),
                    content: "// a".into(),
                },
                PreviewFile {
                    path: "bApi.ts".into(),
                    content: "// b".into(),
                },
            ]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout.first().map(String::as_str), Some("── aApi.ts ──"));
        assert_eq!(out.stdout.last().map(String::as_str), Some("2 files would be generated"));
    }
}

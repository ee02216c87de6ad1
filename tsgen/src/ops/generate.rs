//! Generate operation - client code generation from a document.

use std::path::Path;

use eyre::{Result, WrapErr};
use tsgen_codegen::pipeline::{Pipeline, Severity};
use tsgen_codegen_typescript::{Generator, LanguageCodegen};
use tsgen_document::Document;

use super::messages;
use crate::{
    config::Settings,
    reports::{GenerateReport, GenerationResult, PreviewFile},
};

/// Execute the generate operation.
///
/// Runs the pipeline on the document and writes (or previews) one module
/// per group.
pub fn generate(
    document: Document,
    document_path: &Path,
    settings: &Settings,
    dry_run: bool,
) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .strict(settings.strict)
        .run(document)
        .wrap_err("Pipeline failed, run `tsgen check` to see diagnostics")?;

    let warnings = messages(&ctx.diagnostics, Severity::Warning);
    let generator = Generator::from_context(ctx)?.with_options(settings.options.clone());

    let ir = generator.ir();
    let endpoint_count = ir.endpoints.len();
    let groups = ir
        .groups()
        .into_iter()
        .map(|g| (g.to_string(), ir.endpoints_in(g).count()))
        .collect();

    let result = if dry_run {
        GenerationResult::Preview(
            generator
                .preview()
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect(),
        )
    } else {
        let written = generator
            .generate(&settings.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: settings.output_dir.clone(),
            files: written.written,
        }
    };

    Ok(GenerateReport {
        document_path: document_path.to_path_buf(),
        warnings,
        endpoint_count,
        groups,
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tsgen_codegen_typescript::{ErrorStyle, GeneratorOptions};

    use super::*;

    const DOCUMENT: &str = r#"{"paths": {
        "/role": {"get": {}},
        "/role/{id}": {"delete": {}},
        "/user/me": {"get": {}}
    }}"#;

    fn settings(output_dir: &Path, strict: bool) -> Settings {
        Settings {
            output_dir: output_dir.to_path_buf(),
            strict,
            options: GeneratorOptions {
                preamble: Some("import axios from './base'".into()),
                error_style: ErrorStyle::Sentinel,
            },
        }
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();
        let report = generate(
            DOCUMENT.parse().unwrap(),
            Path::new("swagger.json"),
            &settings(temp.path(), false),
            false,
        )
        .unwrap();

        assert_eq!(report.endpoint_count, 3);
        assert_eq!(report.groups, vec![("role".to_string(), 2), ("user".to_string(), 1)]);
        match report.result {
            GenerationResult::Written { files, .. } => {
                assert_eq!(files, vec![temp.path().join("roleApi.ts"), temp.path().join("userApi.ts")]);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }

        let role = std::fs::read_to_string(temp.path().join("roleApi.ts")).unwrap();
        assert!(role.starts_with("import axios from './base'\n\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        let report = generate(
            DOCUMENT.parse().unwrap(),
            Path::new("swagger.json"),
            &settings(&output, false),
            true,
        )
        .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref files) if files.len() == 2));
        assert!(!output.exists());
    }

    #[test]
    fn test_strict_collision_fails() {
        let temp = TempDir::new().unwrap();
        let doc: Document = r#"{"paths": {"/a/b-c": {"get": {}}, "/a/b.c": {"get": {}}}}"#
            .parse()
            .unwrap();

        let result = generate(doc, Path::new("swagger.json"), &settings(temp.path(), true), false);
        assert!(result.is_err());
    }
}

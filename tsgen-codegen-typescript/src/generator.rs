//! TypeScript API client generator.

use std::{collections::HashSet, fmt, path::Path, str::FromStr};

use eyre::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use tsgen_codegen::{
    CodeBuilder, CodeFragment,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    naming::PLACEHOLDER,
    pipeline::{CompilationContext, phases::lower_document},
};
use tsgen_core::GeneratedFile;
use tsgen_document::Document;
use tsgen_ir::{ApiIR, Endpoint, Member, ObjectShape, TypeExpr};

use crate::{
    ast::{Fn, JsObject, Param, TypeAlias},
    files::ApiTs,
    render::{TypeScriptRenderer, binding_name, property_key},
};

/// How generated functions report a failed request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStyle {
    /// Return the response, or `null` on failure.
    #[default]
    Sentinel,
    /// Return `{ ok: true, data }` or `{ ok: false, error }`.
    Result,
}

impl ErrorStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStyle::Sentinel => "sentinel",
            ErrorStyle::Result => "result",
        }
    }
}

impl fmt::Display for ErrorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sentinel" => Ok(ErrorStyle::Sentinel),
            "result" => Ok(ErrorStyle::Result),
            other => Err(format!(
                "unknown error style '{}', expected 'sentinel' or 'result'",
                other
            )),
        }
    }
}

/// Generation options.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Code placed above the generated declarations of every file. Defaults
    /// to `import axios from 'axios'`.
    pub preamble: Option<String>,
    pub error_style: ErrorStyle,
}

/// TypeScript code generator that produces one axios client module per group.
pub struct Generator {
    ir: ApiIR,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: ApiTs::file_name(file.group()),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.write(output_dir)?;
            tracing::debug!(path = %path.display(), "wrote file");
            result.written.push(path);
        }
        Ok(result)
    }
}

impl Generator {
    pub fn new(ir: ApiIR) -> Self {
        Self {
            ir,
            options: GeneratorOptions::default(),
        }
    }

    /// Create a generator from a compilation context after the pipeline ran.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.take_ir()?))
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn ir(&self) -> &ApiIR {
        &self.ir
    }

    /// Source fragments per group, in encounter order. Each fragment holds one
    /// endpoint's type declarations followed by its function.
    pub fn groups(&self) -> IndexMap<String, Vec<String>> {
        self.ir
            .groups()
            .into_iter()
            .map(|group| {
                let mut declared = HashSet::new();
                let fragments = self
                    .ir
                    .endpoints_in(group)
                    .map(|endpoint| self.endpoint_fragment(endpoint, &mut declared))
                    .collect();
                (group.to_string(), fragments)
            })
            .collect()
    }

    fn files(&self) -> Vec<ApiTs> {
        self.groups()
            .into_iter()
            .map(|(group, fragments)| {
                ApiTs::new(group, fragments).with_preamble(self.options.preamble.clone())
            })
            .collect()
    }

    /// Render one endpoint. Recursive named types it needs are declared in
    /// front of it unless an earlier endpoint of the group already did.
    fn endpoint_fragment<'a>(
        &'a self,
        endpoint: &'a Endpoint,
        declared: &mut HashSet<&'a str>,
    ) -> String {
        let renderer = TypeScriptRenderer::new();
        let names = &endpoint.names;
        let label = &endpoint.label;
        let mut builder = CodeBuilder::typescript();

        for name in &endpoint.requires {
            if let Some(named) = self.ir.named_type(name)
                && declared.insert(named.name.as_str())
            {
                builder.emit(&TypeAlias::new(&named.name, renderer.render(&named.ty)));
            }
        }

        if endpoint.has_path_params() {
            let shape = endpoint
                .path_params
                .iter()
                .fold(ObjectShape::new(), |shape, name| {
                    shape.member(Member::new(name, TypeExpr::string()))
                });
            builder.emit(
                &TypeAlias::new(&names.path_type, renderer.render(&TypeExpr::object(shape)))
                    .doc(format!("{} path parameters", label)),
            );
        }

        if endpoint.has_query() {
            let shape = endpoint.query.iter().fold(ObjectShape::new(), |shape, param| {
                shape.member(
                    Member::new(&param.name, TypeExpr::string())
                        .optional(!param.required)
                        .doc(param.description.clone().unwrap_or_default()),
                )
            });
            builder.emit(
                &TypeAlias::new(&names.query_type, renderer.render(&TypeExpr::object(shape)))
                    .doc(format!("{} query parameters", label)),
            );
        }

        if let Some(body) = &endpoint.body {
            builder.emit(
                &TypeAlias::new(&names.body_type, renderer.render(body))
                    .doc(format!("{} request body", label)),
            );
        }

        let response = endpoint
            .response
            .as_ref()
            .map(|ty| renderer.render(ty))
            .unwrap_or_else(|| renderer.render(&TypeExpr::unknown()));
        builder.emit(
            &TypeAlias::new(&names.response_type, response).doc(format!("{} response", label)),
        );

        builder.emit(&self.client_fn(endpoint));
        builder.build()
    }

    fn client_fn(&self, endpoint: &Endpoint) -> Fn {
        let names = &endpoint.names;
        let mut func = Fn::new(&names.function)
            .async_()
            .doc(format!("{}\nModule: {}", endpoint.label, endpoint.tag));

        if endpoint.has_path_params() {
            let fields: Vec<String> = endpoint
                .path_params
                .iter()
                .map(String::as_str)
                .map(path_field)
                .collect();
            func = func.param(Param::destructured(fields.as_slice(), &names.path_type));
        }
        if endpoint.has_query() {
            func = func.param(Param::new("query", &names.query_type));
        }
        if endpoint.body.is_some() {
            func = func.param(Param::new("data", &names.body_type));
        }

        let config = JsObject::new()
            .template("url", interpolate_url(&endpoint.url))
            .string("method", &endpoint.method)
            .raw_if(endpoint.has_query(), "params", "query")
            .shorthand_if(endpoint.body.is_some(), "data");

        let (success, failure) = match self.options.error_style {
            ErrorStyle::Sentinel => ("res".to_string(), "null".to_string()),
            ErrorStyle::Result => (
                JsObject::new().raw("ok", "true").raw("data", "res").inline(),
                JsObject::new().raw("ok", "false").shorthand("error").inline(),
            ),
        };

        func.body_fragment(CodeFragment::block(
            "try {",
            vec![
                CodeFragment::block(
                    format!("const res = await axios<{}>({{", names.response_type),
                    config.properties_to_fragments(),
                    Some("})".to_string()),
                ),
                CodeFragment::line(format!("return {}", success)),
            ],
            Some("} catch (error) {".to_string()),
        ))
        .body_fragment(CodeFragment::indent(vec![CodeFragment::line(format!(
            "return {}",
            failure
        ))]))
        .body_line("}")
    }
}

/// Destructuring entry of a path parameter: shorthand when the name is
/// usable as a binding, `'user-id':userId` otherwise.
fn path_field(name: &str) -> String {
    let binding = binding_name(name);
    if binding == name {
        binding
    } else {
        format!("{}:{}", property_key(name), binding)
    }
}

/// Turn `{name}` placeholders into template-literal substitutions of the
/// parameter bindings. Empty placeholders are left untouched.
fn interpolate_url(url: &str) -> String {
    PLACEHOLDER
        .replace_all(url, |caps: &regex::Captures<'_>| {
            if caps[1].is_empty() {
                caps[0].to_string()
            } else {
                format!("${{{}}}", binding_name(&caps[1]))
            }
        })
        .into_owned()
}

/// Group a document's operations into TypeScript source fragments.
///
/// Shorthand for lowering the document and calling [`Generator::groups`] with
/// default options. No lints are run.
pub fn generate_api_groups(document: &Document) -> IndexMap<String, Vec<String>> {
    Generator::new(lower_document(document)).groups()
}

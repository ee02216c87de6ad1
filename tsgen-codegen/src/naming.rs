//! Endpoint naming and grouping.
//!
//! Every name is derived from the URL template and the HTTP verb alone, so the
//! same document always produces the same identifiers.

use std::sync::LazyLock;

use regex::Regex;
use tsgen_core::{capitalize, to_pascal_case};
use tsgen_document::HttpMethod;
use tsgen_ir::EndpointNames;

/// Matches a `{param}` placeholder in a URL template.
pub static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("placeholder pattern is valid"));

/// Group name used when a URL has no non-empty segment.
pub const ROOT_GROUP: &str = "root";

/// Synthesize the PascalCase identifier of a URL template.
///
/// The first `api` segment is dropped, `{param}` becomes `by_param`, and `/`,
/// `-` and `.` separate words.
///
/// ```
/// use tsgen_codegen::naming::synthesize_identifier;
///
/// assert_eq!(synthesize_identifier("/api/user/{id}/role"), "UserByIdRole");
/// assert_eq!(synthesize_identifier("/template/batch-create"), "TemplateBatchCreate");
/// ```
pub fn synthesize_identifier(url: &str) -> String {
    let mut segments: Vec<&str> = url.split('/').collect();
    if let Some(pos) = segments.iter().position(|s| *s == "api") {
        segments.remove(pos);
    }
    let url = segments.join("/");

    let url = PLACEHOLDER.replace_all(&url, "by_${1}");
    let words: String = url
        .chars()
        .map(|c| match c {
            '/' | '-' | '.' => '_',
            c => c,
        })
        .collect();

    to_pascal_case(&words)
}

/// Placeholder names of a URL template in template order. Empty names (`{}`)
/// are dropped.
pub fn path_placeholders(url: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(url)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Output group of a URL template: its first non-empty segment, else `root`.
pub fn group_key(url: &str) -> &str {
    url.split('/')
        .find(|s| !s.is_empty())
        .unwrap_or(ROOT_GROUP)
}

/// Whether `name` can be used as a bare TypeScript identifier (reserved words
/// are not checked).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => chars.all(is_identifier_char),
        _ => false,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Type name for a definition declared by name.
///
/// Valid identifiers are kept. Anything else is split on the characters an
/// identifier can't hold and PascalCased, so `model.Menu` becomes `ModelMenu`.
///
/// ```
/// use tsgen_codegen::naming::type_identifier;
///
/// assert_eq!(type_identifier("Menu"), "Menu");
/// assert_eq!(type_identifier("model.Menu"), "ModelMenu");
/// ```
pub fn type_identifier(name: &str) -> String {
    if is_identifier(name) {
        return name.to_string();
    }

    let words: String = name
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { '_' })
        .collect();
    let ident = to_pascal_case(&words);

    match ident.chars().next() {
        Some(c) if !c.is_ascii_digit() => ident,
        _ => format!("_{}", ident),
    }
}

/// Derive the function and type names of one endpoint.
pub fn endpoint_names(method: HttpMethod, url: &str) -> EndpointNames {
    let identifier = synthesize_identifier(url);
    let verb = method.as_str();
    let type_prefix = format!("{}{}", capitalize(verb), identifier);

    EndpointNames {
        function: format!("{}{}", verb, identifier),
        path_type: format!("{}Path", type_prefix),
        query_type: format!("{}Query", type_prefix),
        body_type: format!("{}Body", type_prefix),
        response_type: format!("{}Res", type_prefix),
        identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_with_placeholder() {
        assert_eq!(synthesize_identifier("/api/user/{id}/role"), "UserByIdRole");
    }

    #[test]
    fn test_identifier_separators() {
        assert_eq!(synthesize_identifier("/template/list"), "TemplateList");
        assert_eq!(synthesize_identifier("/auth/refresh-token"), "AuthRefreshToken");
        assert_eq!(synthesize_identifier("/file/v1.2/upload"), "FileV12Upload");
    }

    #[test]
    fn test_identifier_only_drops_api_segment() {
        assert_eq!(synthesize_identifier("/apikey/list"), "ApikeyList");
        assert_eq!(synthesize_identifier("/api/api/list"), "ApiList");
    }

    #[test]
    fn test_identifier_root() {
        assert_eq!(synthesize_identifier("/"), "");
    }

    #[test]
    fn test_path_placeholders() {
        assert_eq!(
            path_placeholders("/org/{orgId}/user/{id}"),
            vec!["orgId", "id"]
        );
        assert!(path_placeholders("/user/{}").is_empty());
        assert!(path_placeholders("/user").is_empty());
    }

    #[test]
    fn test_group_key() {
        assert_eq!(group_key("/permission"), "permission");
        assert_eq!(group_key("/permission/{id}"), "permission");
        assert_eq!(group_key("//role/list"), "role");
        assert_eq!(group_key("/"), "root");
        assert_eq!(group_key(""), "root");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Menu"));
        assert!(is_identifier("$ref_1"));
        assert!(!is_identifier("model.Menu"));
        assert!(!is_identifier("user-id"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_type_identifier() {
        assert_eq!(type_identifier("Dept"), "Dept");
        assert_eq!(type_identifier("model.Menu"), "ModelMenu");
        assert_eq!(type_identifier("response.Page«model.Menu»"), "ResponsePageModelMenu");
        assert_eq!(type_identifier("v1.tree-node"), "V1TreeNode");
        assert_eq!(type_identifier("2fa.Setting"), "_2faSetting");
    }

    #[test]
    fn test_endpoint_names() {
        let names = endpoint_names(HttpMethod::Post, "/api/user/{id}/role");
        assert_eq!(names.identifier, "UserByIdRole");
        assert_eq!(names.function, "postUserByIdRole");
        assert_eq!(names.path_type, "PostUserByIdRolePath");
        assert_eq!(names.query_type, "PostUserByIdRoleQuery");
        assert_eq!(names.body_type, "PostUserByIdRoleBody");
        assert_eq!(names.response_type, "PostUserByIdRoleRes");
    }
}

//! Shared string helpers for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Only the first character of each `_`-separated segment is touched, the
/// rest of the segment is kept as written.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Uppercase the first character of a string (e.g., "post" -> "Post")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("_user_by_id"), "UserById");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("batch__create"), "BatchCreate");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("get"), "Get");
        assert_eq!(capitalize("Delete"), "Delete");
        assert_eq!(capitalize(""), "");
    }
}

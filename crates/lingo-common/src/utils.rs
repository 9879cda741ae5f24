//! Shared string helpers.

/// Splits a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits `key=value` on the first `=`.
///
/// Returns `None` when there is no `=` or the key is empty. The value may be
/// empty and may itself contain `=`.
pub fn parse_assignment(input: &str) -> Option<(&str, &str)> {
    let (key, value) = input.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Returns the string if it is non-empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("en, zh-cn,,fr "), vec!["en", "zh-cn", "fr"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("name=World"), Some(("name", "World")));
        assert_eq!(parse_assignment("expr=a=b"), Some(("expr", "a=b")));
        assert_eq!(parse_assignment("empty="), Some(("empty", "")));
        assert_eq!(parse_assignment("=value"), None);
        assert_eq!(parse_assignment("novalue"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("en")), Some("en"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}

//! Small helpers for reading form controls.

/// Value of an id `<select>`; the empty option means nothing picked
pub fn parse_select_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Render an optional id back into a `<select>` value
pub fn select_value(id: Option<impl ToString>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

/// Trimmed text, or `None` when blank
pub fn empty_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_id() {
        assert_eq!(parse_select_id("12"), Some(12));
        assert_eq!(parse_select_id(""), None);
        assert_eq!(parse_select_id("abc"), None);
    }

    #[test]
    fn test_select_value_and_blank_text() {
        assert_eq!(select_value(Some(3)), "3");
        assert_eq!(select_value(None::<i64>), "");
        assert_eq!(empty_to_none("  "), None);
        assert_eq!(empty_to_none(" Ana "), Some("Ana".to_string()));
    }
}

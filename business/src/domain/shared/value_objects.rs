/// Trims `value` and returns it unless nothing is left.
///
/// Names and units are stored trimmed, so `" Dairy "` and `"Dairy"` collide
/// on the uniqueness check.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Same as [`non_blank`] for optional input.
pub fn non_blank_opt(value: Option<&str>) -> Option<String> {
    value.and_then(non_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_surrounding_whitespace() {
        assert_eq!(non_blank("  Dairy "), Some("Dairy".to_string()));
    }

    #[test]
    fn should_reject_empty_and_whitespace() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   \t"), None);
    }

    #[test]
    fn should_reject_missing_optional_value() {
        assert_eq!(non_blank_opt(None), None);
        assert_eq!(non_blank_opt(Some(" g ")), Some("g".to_string()));
    }
}

use business::domain::shared::listing::TextFilter;

/// `ILIKE` pattern matching the filter as a literal substring.
///
/// Used with `ESCAPE '\'`; an empty filter yields `%%`.
pub fn like_pattern(filter: &TextFilter) -> String {
    let mut pattern = String::with_capacity(filter.as_str().len() + 2);
    pattern.push('%');
    for c in filter.as_str().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_everything_for_empty_filter() {
        assert_eq!(like_pattern(&TextFilter::default()), "%%");
        assert_eq!(like_pattern(&TextFilter::new(Some(""))), "%%");
    }

    #[test]
    fn should_escape_wildcards() {
        assert_eq!(like_pattern(&TextFilter::new(Some("100%"))), "%100\\%%");
        assert_eq!(like_pattern(&TextFilter::new(Some("a_b\\c"))), "%a\\_b\\\\c%");
    }

    #[test]
    fn should_lowercase_through_filter() {
        assert_eq!(like_pattern(&TextFilter::new(Some("Egg"))), "%egg%");
        assert_eq!(like_pattern(&TextFilter::new(Some("Egg "))), "%egg %");
    }
}

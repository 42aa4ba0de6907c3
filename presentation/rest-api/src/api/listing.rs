use business::domain::shared::listing::{NameQuery, Pagination, TextFilter};

/// Builds a name-only listing query from raw query parameters.
pub fn name_query(limit: Option<i64>, offset: Option<i64>, name: Option<&str>) -> NameQuery {
    NameQuery {
        pagination: Pagination::new(limit, offset),
        name: TextFilter::new(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_and_normalize_parameters() {
        let query = name_query(Some(1000), Some(-1), Some("Egg"));

        assert_eq!(query.pagination.limit, 500);
        assert_eq!(query.pagination.offset, 0);
        assert_eq!(query.name.as_str(), "egg");
    }
}

//! Pagination metadata for list responses.

use serde::Serialize;

/// Describes the page window returned by a list query.
///
/// An empty collection is described by the all-zero value
/// (`Metadata::default()`), whatever page was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub current_page: i64,
    pub page_size: i64,
    pub first_page: i64,
    pub last_page: i64,
    pub total_records: i64,
}

/// Derive metadata from the filtered row count and the requested window.
pub fn calculate_metadata(total_records: i64, page: i64, page_size: i64) -> Metadata {
    if total_records <= 0 || page_size <= 0 {
        return Metadata::default();
    }

    Metadata {
        current_page: page,
        page_size,
        first_page: 1,
        last_page: (total_records + page_size - 1) / page_size,
        total_records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(calculate_metadata(0, 1, 20), Metadata::default());
        assert_eq!(calculate_metadata(0, 7, 100), Metadata::default());
    }

    #[test]
    fn last_page_rounds_up() {
        let meta = calculate_metadata(21, 1, 10);
        assert_eq!(meta.last_page, 3);
        assert_eq!(meta.first_page, 1);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        assert_eq!(calculate_metadata(20, 1, 10).last_page, 2);
    }

    #[test]
    fn third_page_of_twenty_five() {
        assert_eq!(
            calculate_metadata(25, 3, 10),
            Metadata {
                current_page: 3,
                page_size: 10,
                first_page: 1,
                last_page: 3,
                total_records: 25,
            }
        );
    }

    #[test]
    fn current_page_echoes_request_past_the_end() {
        let meta = calculate_metadata(5, 4, 10);
        assert_eq!(meta.current_page, 4);
        assert_eq!(meta.last_page, 1);
    }
}

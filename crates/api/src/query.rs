//! Query parameter types for list endpoints.

use musicdb_core::filters::{FilterParams, Filters};
use musicdb_core::music::parse_genre_csv;
use musicdb_core::validation::FieldErrors;
use serde::Deserialize;

/// `GET /musics?title=&genres=&page=&page_size=&sort=`
///
/// Numeric parameters are taken as strings so a malformed value becomes a
/// field-level validation error instead of a blanket 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListMusicsParams {
    pub title: Option<String>,
    pub genres: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

impl ListMusicsParams {
    /// Free-text title search; empty when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Required genres from the comma-separated `genres` parameter.
    pub fn genres(&self) -> Vec<String> {
        self.genres.as_deref().map(parse_genre_csv).unwrap_or_default()
    }

    /// Validated paging and sort.
    pub fn filters(&self) -> Result<Filters, FieldErrors> {
        Filters::from_params(&FilterParams {
            page: self.page.as_deref(),
            page_size: self.page_size.as_deref(),
            sort: self.sort.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_use_defaults() {
        let params = ListMusicsParams::default();
        assert_eq!(params.title(), "");
        assert!(params.genres().is_empty());
        assert_eq!(params.filters().unwrap(), Filters::default());
    }

    #[test]
    fn genres_are_split_on_commas() {
        let params = ListMusicsParams {
            genres: Some("rock, indie".to_string()),
            ..Default::default()
        };
        assert_eq!(params.genres(), vec!["rock".to_string(), "indie".to_string()]);
    }

    #[test]
    fn invalid_sort_surfaces_as_field_error() {
        let params = ListMusicsParams {
            sort: Some("version".to_string()),
            ..Default::default()
        };
        let errors = params.filters().unwrap_err();
        assert_eq!(errors.get("sort"), Some("invalid sort value"));
    }
}

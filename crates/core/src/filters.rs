//! List filter specification: paging and sort validated against a safelist.
//!
//! Sort columns cannot be bound as query parameters, so the only path from a
//! request to the ORDER BY clause is [`SORT_SAFELIST`]: a request token is
//! looked up there and resolved to a [`SortKey`] whose SQL fragments are
//! `&'static str`. Unknown tokens are a validation failure.

use validator::Validate;

use crate::validation::FieldErrors;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE: i64 = 10_000_000;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_SORT: &str = "id";

/// Sortable columns of the `musics` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Duration,
    Popularity,
}

impl SortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Title => "title",
            SortColumn::Duration => "duration",
            SortColumn::Popularity => "popularity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortKey {
    const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Resolve a request token such as `"-popularity"` against the safelist.
    pub fn parse(token: &str) -> Option<SortKey> {
        SORT_SAFELIST
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, key)| *key)
    }
}

/// Every accepted `sort` token. A leading `-` selects descending order.
pub const SORT_SAFELIST: &[(&str, SortKey)] = &[
    ("id", SortKey::new(SortColumn::Id, SortDirection::Asc)),
    ("title", SortKey::new(SortColumn::Title, SortDirection::Asc)),
    ("duration", SortKey::new(SortColumn::Duration, SortDirection::Asc)),
    ("popularity", SortKey::new(SortColumn::Popularity, SortDirection::Asc)),
    ("-id", SortKey::new(SortColumn::Id, SortDirection::Desc)),
    ("-title", SortKey::new(SortColumn::Title, SortDirection::Desc)),
    ("-duration", SortKey::new(SortColumn::Duration, SortDirection::Desc)),
    ("-popularity", SortKey::new(SortColumn::Popularity, SortDirection::Desc)),
];

/// Raw paging/sort query parameters as they arrive on the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterParams<'a> {
    pub page: Option<&'a str>,
    pub page_size: Option<&'a str>,
    pub sort: Option<&'a str>,
}

/// Range rules for the numeric parameters once they have parsed.
#[derive(Debug, Validate)]
struct PageBounds {
    #[validate(range(min = 1, max = MAX_PAGE, message = "must be between 1 and 10 million"))]
    page: i64,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "must be between 1 and 100"))]
    page_size: i64,
}

/// A validated filter specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: SortKey,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::new(SortColumn::Id, SortDirection::Asc),
        }
    }
}

impl Filters {
    /// Validate raw parameters, applying defaults for absent ones.
    ///
    /// All violations across `page`, `page_size` and `sort` are reported
    /// together.
    pub fn from_params(params: &FilterParams<'_>) -> Result<Filters, FieldErrors> {
        let (page, page_err) = parse_int("page", params.page, DEFAULT_PAGE);
        let (page_size, page_size_err) =
            parse_int("page_size", params.page_size, DEFAULT_PAGE_SIZE);

        let bounds = PageBounds { page, page_size };
        let range_errors = match bounds.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        };

        let sort = SortKey::parse(params.sort.unwrap_or(DEFAULT_SORT));
        let sort_error = sort
            .is_none()
            .then_some(("sort", "invalid sort value"));

        let errors = page_err
            .into_iter()
            .chain(page_size_err)
            .chain(sort_error)
            .collect::<FieldErrors>()
            .merge(range_errors);

        match sort {
            Some(sort) if errors.is_empty() => Ok(Filters {
                page,
                page_size,
                sort,
            }),
            _ => Err(errors),
        }
    }

    /// LIMIT value.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// OFFSET value: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

/// Parse an optional integer parameter. A value that does not parse yields
/// the default (so range checks stay quiet) plus an error for the field.
fn parse_int(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
) -> (i64, Option<(&'static str, &'static str)>) {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => (default, None),
        Some(s) => match s.parse::<i64>() {
            Ok(v) => (v, None),
            Err(_) => (default, Some((field, "must be an integer value"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<'a>(
        page: Option<&'a str>,
        page_size: Option<&'a str>,
        sort: Option<&'a str>,
    ) -> FilterParams<'a> {
        FilterParams {
            page,
            page_size,
            sort,
        }
    }

    #[test]
    fn defaults_when_absent() {
        let filters = Filters::from_params(&FilterParams::default()).unwrap();
        assert_eq!(filters, Filters::default());
        assert_eq!(filters.limit(), 20);
        assert_eq!(filters.offset(), 0);
    }

    #[test]
    fn offset_is_zero_based() {
        let filters = Filters::from_params(&params(Some("3"), Some("10"), None)).unwrap();
        assert_eq!(filters.limit(), 10);
        assert_eq!(filters.offset(), 20);
    }

    #[test]
    fn descending_prefix_resolves_direction() {
        let filters = Filters::from_params(&params(None, None, Some("-popularity"))).unwrap();
        assert_eq!(filters.sort.column, SortColumn::Popularity);
        assert_eq!(filters.sort.direction, SortDirection::Desc);
        assert_eq!(filters.sort.column.as_sql(), "popularity");
        assert_eq!(filters.sort.direction.as_sql(), "DESC");
    }

    #[test]
    fn every_safelist_token_parses() {
        for (token, key) in SORT_SAFELIST {
            assert_eq!(SortKey::parse(token), Some(*key));
        }
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let errors = Filters::from_params(&params(None, None, Some("created_at"))).unwrap_err();
        assert_eq!(errors.get("sort"), Some("invalid sort value"));
    }

    #[test]
    fn injection_attempt_is_rejected() {
        let errors =
            Filters::from_params(&params(None, None, Some("id; DROP TABLE musics"))).unwrap_err();
        assert_eq!(errors.get("sort"), Some("invalid sort value"));
    }

    #[test]
    fn page_size_bounds() {
        assert!(Filters::from_params(&params(None, Some("100"), None)).is_ok());

        let errors = Filters::from_params(&params(None, Some("101"), None)).unwrap_err();
        assert_eq!(errors.get("page_size"), Some("must be between 1 and 100"));

        let errors = Filters::from_params(&params(None, Some("0"), None)).unwrap_err();
        assert!(errors.get("page_size").is_some());
    }

    #[test]
    fn page_bounds() {
        let errors = Filters::from_params(&params(Some("0"), None, None)).unwrap_err();
        assert!(errors.get("page").is_some());

        let errors = Filters::from_params(&params(Some("10000001"), None, None)).unwrap_err();
        assert!(errors.get("page").is_some());
    }

    #[test]
    fn declared_maximums_are_the_inclusive_edges() {
        let max_page = MAX_PAGE.to_string();
        let max_size = MAX_PAGE_SIZE.to_string();
        let at_max = params(Some(max_page.as_str()), Some(max_size.as_str()), None);
        let filters = Filters::from_params(&at_max).unwrap();
        assert_eq!(filters.page, MAX_PAGE);
        assert_eq!(filters.page_size, MAX_PAGE_SIZE);

        let over_page = (MAX_PAGE + 1).to_string();
        let over_size = (MAX_PAGE_SIZE + 1).to_string();
        let over_max = params(Some(over_page.as_str()), Some(over_size.as_str()), None);
        let errors = Filters::from_params(&over_max).unwrap_err();
        assert_eq!(errors.get("page"), Some("must be between 1 and 10 million"));
        assert_eq!(errors.get("page_size"), Some("must be between 1 and 100"));
    }

    #[test]
    fn non_integer_is_reported() {
        let errors = Filters::from_params(&params(Some("two"), None, None)).unwrap_err();
        assert_eq!(errors.get("page"), Some("must be an integer value"));
    }

    #[test]
    fn all_violations_reported_together() {
        let errors =
            Filters::from_params(&params(Some("-1"), Some("abc"), Some("bogus"))).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

//! SQL construction for the music list query.
//!
//! Request values (search text, genres, limit, offset) are always bound as
//! parameters. The only dynamic SQL text is the ORDER BY clause, and it is
//! assembled exclusively from the `&'static str` fragments of a validated
//! [`SortKey`].

use musicdb_core::filters::{Filters, SortColumn, SortKey};

/// Column list shared across queries. `popularity` is stored as NUMERIC and
/// read back as float8.
pub(crate) const COLUMNS: &str =
    "id, title, duration, genres, popularity::float8 AS popularity, created_at, version";

/// Shared predicate for the page and count statements.
///
/// - `$1` search text; empty matches every row.
/// - `$2` required genres; empty matches every row, otherwise the row's
///   genres must contain all of them.
const WHERE_CLAUSE: &str = "(to_tsvector('simple', title) @@ plainto_tsquery('simple', $1) OR $1 = '') \
     AND (genres @> $2 OR $2 = '{}')";

/// Inputs of one list request.
#[derive(Debug, Clone, Copy)]
pub struct MusicListQuery<'a> {
    pub title: &'a str,
    pub genres: &'a [String],
    pub filters: &'a Filters,
}

impl<'a> MusicListQuery<'a> {
    pub fn new(title: &'a str, genres: &'a [String], filters: &'a Filters) -> Self {
        Self {
            title,
            genres,
            filters,
        }
    }

    /// Page statement. Binds: `$1` title, `$2` genres, `$3` limit, `$4` offset.
    pub fn page_sql(&self) -> String {
        format!(
            "SELECT {COLUMNS} FROM musics \
             WHERE {WHERE_CLAUSE} \
             ORDER BY {} \
             LIMIT $3 OFFSET $4",
            order_by(self.filters.sort)
        )
    }

    /// Count statement over the same predicate. Binds: `$1` title, `$2` genres.
    pub fn count_sql(&self) -> String {
        format!("SELECT count(*) FROM musics WHERE {WHERE_CLAUSE}")
    }
}

/// ORDER BY body. Anything other than `id` gets an `id ASC` tie-break so
/// rows with equal sort values keep a stable position across pages.
fn order_by(sort: SortKey) -> String {
    let column = sort.column.as_sql();
    let direction = sort.direction.as_sql();
    match sort.column {
        SortColumn::Id => format!("{column} {direction}"),
        _ => format!("{column} {direction}, id ASC"),
    }
}

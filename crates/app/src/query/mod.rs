//! List Queries
//!
//! Turns the raw key/value pairs of a query string into a [`ListQuery`]: an
//! optional free-text [`Search`], a set of field [`Predicate`]s, an ordered sort,
//! a field [`Projection`] and [`Pagination`]. Parsing is lenient and never fails;
//! anything that cannot be understood falls back to a default or is dropped.
//!
//! A parsed query is executed against a [`Listable`] table with
//! [`pipeline::execute`], which yields a [`Page`].

mod fields;
mod filter;
mod page;
mod pagination;
pub mod pipeline;
mod projection;
mod search;
mod sort;

pub use fields::{Field, FieldKind, Listable, Schema};
pub use filter::{Condition, Operator, Predicate, Value};
pub use page::Page;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, Pagination};
pub use projection::Projection;
pub use search::Search;
pub use sort::{Direction, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search: Option<Search>,
    pub filters: Vec<Predicate>,
    pub sort: Vec<SortKey>,
    pub projection: Projection,
    pub pagination: Pagination,
}

impl ListQuery {
    /// Parse raw query pairs against `schema`.
    ///
    /// `page`, `limit`, `sort`, `fields` and `search` have a fixed meaning;
    /// every other key is treated as a field filter.
    ///
    /// When a reserved key repeats, the last occurrence wins. Filter keys may
    /// repeat freely; see [`Predicate`] for how repeats combine.
    pub fn parse<I, K, V>(params: I, schema: &Schema) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut search = None;
        let mut sort = None;
        let mut fields = None;
        let mut page = None;
        let mut limit = None;
        let mut filters = Vec::new();

        for (key, value) in params {
            let value = value.as_ref().to_owned();

            match key.as_ref() {
                "search" => search = Some(value),
                "sort" => sort = Some(value),
                "fields" => fields = Some(value),
                "page" => page = Some(value),
                "limit" => limit = Some(value),
                other => filters.push((other.to_owned(), value)),
            }
        }

        Self {
            search: search.as_deref().and_then(|term| Search::parse(term, schema)),
            filters: filter::parse(filters, schema),
            sort: sort::parse(sort.as_deref(), schema),
            projection: Projection::parse(fields.as_deref(), schema),
            pagination: Pagination::parse(page.as_deref(), limit.as_deref()),
        }
    }

    /// The query every list endpoint runs when given no parameters.
    #[must_use]
    pub fn unfiltered(schema: &Schema) -> Self {
        Self::parse(std::iter::empty::<(&str, &str)>(), schema)
    }
}

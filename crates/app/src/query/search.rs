//! Free-text search facet.

use smallvec::SmallVec;

use super::fields::{Field, Schema};

/// Case-insensitive substring match of `term` against any of `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub term: String,
    pub fields: SmallVec<[&'static Field; 4]>,
}

impl Search {
    /// Returns `None` for a blank term or when the resource has nothing searchable.
    #[must_use]
    pub fn parse(raw: &str, schema: &Schema) -> Option<Self> {
        let term = raw.trim();

        if term.is_empty() {
            return None;
        }

        let fields: SmallVec<[&'static Field; 4]> = schema.searchable().collect();

        if fields.is_empty() {
            return None;
        }

        Some(Self {
            term: term.to_owned(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::query::tests::BOOKS;

    use super::*;

    #[test]
    fn blank_terms_are_dropped() {
        assert_eq!(Search::parse("", &BOOKS), None);
        assert_eq!(Search::parse("   \t", &BOOKS), None);
    }

    #[test]
    fn term_is_trimmed_and_spans_searchable_fields() {
        let search = Search::parse("  dune ", &BOOKS);

        let Some(search) = search else {
            panic!("expected a search predicate");
        };

        assert_eq!(search.term, "dune");

        let names: Vec<_> = search.fields.iter().map(|field| field.name).collect();

        assert_eq!(names, ["title", "genre", "blurb"]);
    }
}

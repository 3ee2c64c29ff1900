//! Sort facet.

use super::fields::{Field, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static Field,
    pub direction: Direction,
}

impl SortKey {
    #[must_use]
    pub const fn descending(field: &'static Field) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }
}

/// Parse `price,-createdAt` style sort lists.
///
/// Names that are undeclared or not sortable are skipped, as are repeats of a
/// field already sorted on. Falls back to the schema's default sort when
/// nothing usable remains.
pub(super) fn parse(raw: Option<&str>, schema: &Schema) -> Vec<SortKey> {
    let mut keys: Vec<SortKey> = Vec::new();

    for token in raw.unwrap_or_default().split(',').map(str::trim) {
        let (name, direction) = match token.strip_prefix('-') {
            Some(name) => (name, Direction::Descending),
            None => (token, Direction::Ascending),
        };

        let Some(field) = schema.field(name).filter(|field| field.sortable) else {
            continue;
        };

        if keys.iter().any(|key| key.field.name == field.name) {
            continue;
        }

        keys.push(SortKey { field, direction });
    }

    if keys.is_empty() {
        keys.push(schema.default_sort);
    }

    keys
}

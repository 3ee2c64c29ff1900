//! Declared fields of listable resources.

use sqlx::{FromRow, postgres::PgRow};

use super::sort::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Timestamp,
    Uuid,
}

/// A public document field and the column backing it.
///
/// Only fields flagged as searchable, filterable or sortable ever reach the
/// compiled SQL for that facet, and column names only ever come from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            searchable: false,
            filterable: false,
            sortable: false,
        }
    }

    #[must_use]
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Everything the list pipeline needs to know about a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub table: &'static str,

    /// Primary key; always projected and used as the final sort tiebreaker.
    pub id: &'static Field,

    /// Public fields, in document order.
    pub fields: &'static [Field],

    pub default_sort: SortKey,
}

impl Schema {
    /// Look up a declared field by its public name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn searchable(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.searchable)
    }
}

/// A record type that can be listed through [`super::pipeline::execute`].
pub trait Listable: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const SCHEMA: Schema;
}

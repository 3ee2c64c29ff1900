//! One page of list results.

use serde::Serialize;
use serde_json::Value;

use super::{pagination::Pagination, projection::Projection};

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub pagination: Pagination,
    pub projection: Projection,
}

impl<T> Page<T> {
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.pagination.total_pages(self.total_count)
    }

    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            pagination: self.pagination,
            projection: self.projection,
        }
    }

    /// Serialize each item and apply the page's projection to it.
    ///
    /// Item field names must match the public field names declared by the
    /// resource's schema for the projection to take effect.
    ///
    /// # Errors
    ///
    /// Returns an error if an item fails to serialize.
    pub fn into_documents(self) -> Result<Vec<Value>, serde_json::Error>
    where
        T: Serialize,
    {
        let projection = self.projection;

        self.items
            .into_iter()
            .map(|item| serde_json::to_value(item).map(|document| projection.apply(document)))
            .collect()
    }
}

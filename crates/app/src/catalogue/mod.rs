//! Catalogue seeding
//!
//! Fills an empty products table from a remote catalogue feed.

mod fake_store;
mod seed;

pub use fake_store::{FakeStoreClient, FakeStoreError};
pub use seed::{SeedError, SeedOutcome, seed_catalogue};

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::data::NewProduct;

/// A remote source of products to seed the catalogue with.
#[automock]
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Fetch at most `limit` products, ready to insert.
    async fn fetch_products(&self, limit: u32) -> Result<Vec<NewProduct>, FakeStoreError>;
}

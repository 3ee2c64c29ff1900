//! Idempotent catalogue seeding.

use thiserror::Error;
use tracing::info;

use crate::{
    catalogue::{CatalogueSource, FakeStoreError},
    domain::products::{ProductsService, ProductsServiceError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalogue already held this many products; nothing was fetched.
    Skipped(u64),

    /// The catalogue was empty and this many products were inserted.
    Seeded(usize),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to store the catalogue")]
    Products(#[from] ProductsServiceError),

    #[error("failed to fetch the catalogue")]
    Source(#[from] FakeStoreError),
}

/// Fill the products table from `source`, but only when it is empty.
///
/// # Errors
///
/// Returns an error if counting, fetching or inserting fails. Inserts are all
/// or nothing.
pub async fn seed_catalogue(
    products: &dyn ProductsService,
    source: &dyn CatalogueSource,
    limit: u32,
) -> Result<SeedOutcome, SeedError> {
    let existing = products.count_products().await?;

    if existing > 0 {
        info!(existing, "catalogue already populated, skipping seed");

        return Ok(SeedOutcome::Skipped(existing));
    }

    let fetched = source.fetch_products(limit).await?;

    let inserted = products.create_products(fetched).await?.len();

    info!(inserted, "seeded catalogue");

    Ok(SeedOutcome::Seeded(inserted))
}

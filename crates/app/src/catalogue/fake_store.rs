//! Fake Store API client.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalogue::CatalogueSource,
    domain::products::{
        data::{NAME_MAX_CHARS, NewProduct},
        records::ProductUuid,
    },
};

/// Errors that can occur when fetching the remote catalogue.
#[derive(Debug, Error)]
pub enum FakeStoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalogue returned a non-2xx response.
    #[error("unexpected response from catalogue: {0}")]
    UnexpectedResponse(String),

    /// A product's price cannot be represented in minor units.
    #[error("invalid price for {title:?}: {price}")]
    InvalidPrice { title: String, price: Decimal },
}

/// HTTP client for a Fake Store compatible catalogue.
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    base_url: String,
    http: Client,
}

impl FakeStoreClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogueSource for FakeStoreClient {
    async fn fetch_products(&self, limit: u32) -> Result<Vec<NewProduct>, FakeStoreError> {
        let url = format!("{}/products", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FakeStoreError::UnexpectedResponse(format!(
                "product request failed with status {status}: {text}"
            )));
        }

        let products: Vec<FakeStoreProduct> = response.json().await?;

        products
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(NewProduct::try_from)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct FakeStoreProduct {
    title: String,
    price: Decimal,
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<FakeStoreProduct> for NewProduct {
    type Error = FakeStoreError;

    fn try_from(product: FakeStoreProduct) -> Result<Self, Self::Error> {
        let price = to_minor_units(product.price).ok_or_else(|| FakeStoreError::InvalidPrice {
            title: product.title.clone(),
            price: product.price,
        })?;

        Ok(Self {
            uuid: ProductUuid::new(),
            name: product.title.trim().chars().take(NAME_MAX_CHARS).collect(),
            price,
            category: product.category,
            image: product.image,
            description: product.description,
        })
    }
}

/// Major units to minor units, rounding half away from zero. Negative prices
/// have no representation.
fn to_minor_units(price: Decimal) -> Option<u64> {
    (price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

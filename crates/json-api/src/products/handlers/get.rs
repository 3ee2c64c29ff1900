//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vibe_app::domain::products::records::{ProductRecord, ProductUuid};

use crate::{
    envelope::{ApiError, Status},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Product document. Keys match the fields accepted by `fields=`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Price in minor currency units
    pub price: u64,

    pub category: String,

    /// Image URI
    pub image: String,

    pub description: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            price: product.price,
            category: product.category,
            image: product.image,
            description: product.description,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    pub status: Status,
    pub message: String,
    pub data: ProductResponse,
}

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: ProductUuid = product
        .into_inner()
        .parse::<Uuid>()
        .map_err(|_ignored| ApiError::bad_request("Invalid product ID"))?
        .into();

    let product = state
        .app
        .products
        .get_product(uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductEnvelope {
        status: Status::Success,
        message: "Product fetched successfully".to_string(),
        data: product.into(),
    }))
}

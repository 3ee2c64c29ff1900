//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vibe_app::domain::carts::{data::CheckoutDetails, models::CheckoutReceipt};

use crate::{
    carts::errors::into_api_error,
    envelope::{ApiError, Status},
    extensions::*,
    state::State,
};

/// Checkout Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Customer name printed on the receipt
    #[serde(default)]
    pub name: String,

    /// Customer email printed on the receipt
    #[serde(default)]
    pub email: String,
}

impl From<CheckoutRequest> for CheckoutDetails {
    fn from(request: CheckoutRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

/// Checkout Receipt
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    pub receipt_id: String,

    pub name: String,

    pub email: String,

    /// Total charged in minor currency units
    pub total: u64,

    /// Total for display, e.g. `$59.98`
    pub total_formatted: String,

    pub timestamp: String,
}

impl From<CheckoutReceipt> for ReceiptResponse {
    fn from(receipt: CheckoutReceipt) -> Self {
        Self {
            receipt_id: receipt.receipt_id,
            name: receipt.name,
            email: receipt.email,
            total: receipt.total,
            total_formatted: receipt.total_formatted,
            timestamp: receipt.timestamp.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub status: Status,
    pub message: String,
    pub data: ReceiptResponse,
}

/// Checkout Handler
///
/// Empties the cart and returns a receipt for its contents. No payment is
/// taken. The [`CheckoutRequest`] body is optional.
#[endpoint(tags("cart"), summary = "Checkout")]
#[tracing::instrument(
    name = "cart.checkout",
    skip(req, depot),
    fields(owner = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = req.owner();

    tracing::Span::current().record("owner", tracing::field::display(&owner));

    let details = json_body::<CheckoutRequest>(req)
        .await?
        .unwrap_or_default();

    let receipt = state
        .app
        .carts
        .checkout(owner, details.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(
        receipt_id = %receipt.receipt_id,
        total = receipt.total,
        "checked out cart"
    );

    Ok(Json(CheckoutResponse {
        status: Status::Success,
        message: "Checkout completed successfully".to_string(),
        data: receipt.into(),
    }))
}

//! Upsert Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vibe_app::domain::carts::data::CartUpsert;

use crate::{
    carts::{errors::into_api_error, responses::CartResponse},
    envelope::ApiError,
    extensions::*,
    state::State,
};

/// Upsert Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsertCartItemRequest {
    /// The product to set the quantity of
    pub product_id: Option<String>,

    /// New quantity; 0 removes the product from the cart
    pub qty: Option<i64>,
}

impl TryFrom<UpsertCartItemRequest> for CartUpsert {
    type Error = ApiError;

    fn try_from(request: UpsertCartItemRequest) -> Result<Self, Self::Error> {
        let (Some(product_id), Some(qty)) = (request.product_id, request.qty) else {
            return Err(ApiError::bad_request("Product ID and quantity are required"));
        };

        let product_id = product_id.trim();

        if product_id.is_empty() {
            return Err(ApiError::bad_request("Product ID and quantity are required"));
        }

        if qty < 0 {
            return Err(ApiError::bad_request("Quantity must not be negative"));
        }

        let quantity =
            u32::try_from(qty).map_err(|_ignored| ApiError::bad_request("Quantity is too large"))?;

        let product_uuid = product_id
            .parse::<Uuid>()
            .map_err(|_ignored| ApiError::bad_request("Invalid product ID"))?
            .into();

        Ok(Self {
            product_uuid,
            quantity,
        })
    }
}

/// Upsert Cart Item Handler
///
/// Sets the quantity of a product in the cart, adding or removing its line.
/// Takes an [`UpsertCartItemRequest`] JSON body.
#[endpoint(tags("cart"), summary = "Upsert Cart Item")]
#[tracing::instrument(
    name = "cart.upsert",
    skip(req, depot),
    fields(owner = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = req.owner();

    tracing::Span::current().record("owner", tracing::field::display(&owner));

    let request = json_body::<UpsertCartItemRequest>(req)
        .await?
        .ok_or_else(|| ApiError::bad_request("Product ID and quantity are required"))?;

    let upsert = CartUpsert::try_from(request)?;

    let cart = state
        .app
        .carts
        .upsert_item(owner, upsert)
        .await
        .map_err(into_api_error)?;

    tracing::info!(
        product_uuid = %upsert.product_uuid,
        quantity = upsert.quantity,
        "updated cart"
    );

    Ok(Json(CartResponse::new("Cart updated successfully", cart)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use vibe_app::domain::{
        carts::{CartsServiceError, MockCartsService, data::Owner, models::Cart},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart, strict_carts_mock};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").post(handler))
    }

    async fn post_rejected(body: Value) -> TestResult<Value> {
        let mut res = TestClient::post("http://example.com/cart")
            .json(&body)
            .send(&make_service(strict_carts_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(res.take_json().await?)
    }

    #[tokio::test]
    async fn sets_quantity_and_returns_cart() -> TestResult {
        let product = ProductUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_upsert_item()
            .once()
            .withf(move |owner, upsert| {
                owner.as_str() == "u-42"
                    && *upsert
                        == CartUpsert {
                            product_uuid: product,
                            quantity: 2,
                        }
            })
            .return_once(move |owner, _| Ok(make_cart(owner, product, 2_999, 2)));

        let response: CartResponse = TestClient::post("http://example.com/cart?userId=u-42")
            .json(&json!({ "productId": product.to_string(), "qty": 2 }))
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Cart updated successfully");
        assert_eq!(response.data.total, 5_998);

        Ok(())
    }

    #[tokio::test]
    async fn zero_quantity_is_forwarded() -> TestResult {
        let product = ProductUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_upsert_item()
            .once()
            .withf(|owner, upsert| *owner == Owner::guest() && upsert.quantity == 0)
            .return_once(|owner, _| Ok(Cart::empty(owner)));

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": product.to_string(), "qty": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() -> TestResult {
        let body = post_rejected(json!({ "qty": 1 })).await?;

        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Product ID and quantity are required");

        post_rejected(json!({ "productId": ProductUuid::new().to_string() })).await?;

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_bodies_are_json_envelopes() -> TestResult {
        let product = ProductUuid::new().to_string();

        let body = post_rejected(json!({ "productId": product, "qty": "2" })).await?;
        assert_eq!(body["message"], "Invalid request body");

        let body = post_rejected(json!({ "productId": product, "qty": 1.5 })).await?;
        assert_eq!(body["message"], "Invalid request body");

        let mut res = TestClient::post("http://example.com/cart")
            .body("not json")
            .send(&make_service(strict_carts_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;
        assert_eq!(body["status"], "fail");

        Ok(())
    }

    #[tokio::test]
    async fn missing_body_is_json_envelope() -> TestResult {
        let mut res = TestClient::post("http://example.com/cart")
            .send(&make_service(strict_carts_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;
        assert_eq!(body["message"], "Product ID and quantity are required");

        Ok(())
    }

    #[tokio::test]
    async fn negative_quantity_is_rejected() -> TestResult {
        let body = post_rejected(json!({ "productId": ProductUuid::new().to_string(), "qty": -1 })).await?;

        assert_eq!(body["message"], "Quantity must not be negative");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_product_id_is_rejected() -> TestResult {
        let body = post_rejected(json!({ "productId": "abc", "qty": 1 })).await?;

        assert_eq!(body["message"], "Invalid product ID");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_upsert_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "productId": ProductUuid::new().to_string(), "qty": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: Value = res.take_json().await?;

        assert_eq!(body["message"], "Product not found");

        Ok(())
    }
}

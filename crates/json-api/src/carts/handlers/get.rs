//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_api_error, responses::CartResponse},
    envelope::ApiError,
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the lines of the `userId` cart (guest by default) with subtotals
/// and total.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(req.owner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartResponse::new("Cart fetched successfully", cart)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vibe_app::domain::{
        carts::{MockCartsService, data::Owner, models::Cart},
        products::records::ProductUuid,
    };

    use crate::{
        envelope::Status,
        test_helpers::{carts_service, make_cart},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn missing_user_id_reads_guest_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|owner| *owner == Owner::guest())
            .return_once(|owner| Ok(Cart::empty(owner)));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, Status::Success);
        assert_eq!(response.result, 0);
        assert_eq!(response.data.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn returns_lines_and_total_for_owner() -> TestResult {
        let product = ProductUuid::new();
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|owner| owner.as_str() == "u-42")
            .return_once(move |owner| Ok(make_cart(owner, product, 2_999, 2)));

        let response: CartResponse = TestClient::get("http://example.com/cart?userId=u-42")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        let line = response.data.items.first().ok_or("expected one line")?;

        assert_eq!(response.result, 1);
        assert_eq!(response.data.total, 5_998);
        assert_eq!(line.product_id, product.into_uuid());
        assert_eq!(line.qty, 2);
        assert_eq!(line.subtotal, 5_998);

        Ok(())
    }
}

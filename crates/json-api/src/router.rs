//! App Router

use salvo::Router;

use crate::{carts, products};

/// Routes under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::upsert::handler)
                .push(Router::with_path("checkout").post(carts::checkout::handler))
                .push(Router::with_path("{id}").delete(carts::delete::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use jiff::Timestamp;
    use serde_json::json;

    use vibe_app::domain::carts::{
        MockCartsService,
        models::{Cart, CheckoutReceipt},
    };

    use crate::test_helpers::carts_service;

    use super::*;

    #[tokio::test]
    async fn checkout_is_not_taken_for_a_line_id() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_checkout().once().return_once(|_, details| {
            Ok(CheckoutReceipt {
                receipt_id: "rcpt_00000000".to_string(),
                name: details.name,
                email: details.email,
                total: 0,
                total_formatted: "$0.00".to_string(),
                timestamp: Timestamp::UNIX_EPOCH,
            })
        });
        carts.expect_remove_line().never();

        let res = TestClient::post("http://example.com/api/cart/checkout")
            .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
            .send(&carts_service(carts, api_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn cart_routes_share_one_path() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|owner| Ok(Cart::empty(owner)));

        let res = TestClient::get("http://example.com/api/cart?userId=u-1")
            .send(&carts_service(carts, api_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}

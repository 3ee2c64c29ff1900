//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vibe_app::{domain::products::records::PRODUCT_SCHEMA, query::ListQuery};

use crate::{
    envelope::{ApiError, Status},
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsResponse {
    pub status: Status,

    /// Number of products in this page
    pub result: usize,

    /// Number of products matching the search and filters
    pub total_count: u64,

    pub total_pages: u64,

    pub current_page: u32,

    pub message: String,

    /// Product documents, limited to the requested `fields`
    #[salvo(schema(value_type = Vec<Object>))]
    pub data: Vec<Value>,
}

/// Product Index Handler
///
/// Lists products. Supports `search`, field filters such as `category=` and
/// `price[gte]=`, `sort`, `fields`, `page` and `limit`.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = ListQuery::parse(req.query_pairs(), &PRODUCT_SCHEMA);

    let page = state
        .app
        .products
        .list_products(query)
        .await
        .map_err(into_api_error)?;

    let total_count = page.total_count;
    let total_pages = page.total_pages();
    let current_page = page.pagination.page;

    let data = page
        .map(ProductResponse::from)
        .into_documents()
        .or_500("Internal server error")?;

    let message = if data.is_empty() {
        "No products found"
    } else {
        "List of all products"
    };

    Ok(Json(ProductsResponse {
        status: Status::Success,
        result: data.len(),
        total_count,
        total_pages,
        current_page,
        message: message.to_string(),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use sqlx::Error as SqlxError;
    use testresult::TestResult;

    use vibe_app::{
        domain::products::{
            MockProductsService, ProductsServiceError,
            records::{ProductRecord, ProductUuid},
        },
        query::{Page, Pagination, Projection},
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    fn page_of(items: Vec<ProductRecord>, total_count: u64, query: &ListQuery) -> Page<ProductRecord> {
        Page {
            items,
            total_count,
            pagination: query.pagination,
            projection: query.projection.clone(),
        }
    }

    #[tokio::test]
    async fn empty_catalogue_reports_no_products() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .returning(|query| Ok(page_of(vec![], 0, &query)));

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, Status::Success);
        assert_eq!(response.result, 0);
        assert_eq!(response.total_count, 0);
        assert_eq!(response.total_pages, 0);
        assert_eq!(response.current_page, 1);
        assert_eq!(response.message, "No products found");

        Ok(())
    }

    #[tokio::test]
    async fn reports_counts_for_the_requested_page() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|query| query.pagination == Pagination::new(2, 2))
            .returning(|query| {
                let items = vec![
                    make_product(ProductUuid::new(), "Keyboard", 5_000),
                    make_product(ProductUuid::new(), "Laptop", 150_000),
                ];

                Ok(page_of(items, 5, &query))
            });

        let response: ProductsResponse =
            TestClient::get("http://example.com/products?page=2&limit=2")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.result, 2);
        assert_eq!(response.total_count, 5);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.current_page, 2);
        assert_eq!(response.message, "List of all products");

        Ok(())
    }

    #[tokio::test]
    async fn parses_filters_and_sort_from_the_query_string() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|query| {
                let sorted_by_price = query
                    .sort
                    .first()
                    .is_some_and(|key| key.field.name == "price");

                sorted_by_price
                    && query.filters.len() == 2
                    && query.search.as_ref().is_some_and(|search| search.term == "wireless")
            })
            .returning(|query| Ok(page_of(vec![], 0, &query)));

        let res = TestClient::get(
            "http://example.com/products?category=electronics&price%5Bgte%5D=100&sort=price&search=%20wireless%20",
        )
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn applies_projection_but_keeps_id() -> TestResult {
        let uuid = ProductUuid::new();
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|query| query.projection == Projection::parse(Some("id,name"), &PRODUCT_SCHEMA))
            .returning(move |query| {
                Ok(page_of(vec![make_product(uuid, "Mouse", 1_999)], 1, &query))
            });

        let response: ProductsResponse =
            TestClient::get("http://example.com/products?fields=name")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        let document = response.data.first().ok_or("expected one document")?;

        assert_eq!(document["id"], uuid.to_string());
        assert_eq!(document["name"], "Mouse");
        assert!(document.get("price").is_none(), "price should be projected out");

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_is_500_error_envelope() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .returning(|_| Err(ProductsServiceError::Sql(SqlxError::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: Value = res.take_json().await?;

        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Internal server error");

        Ok(())
    }
}

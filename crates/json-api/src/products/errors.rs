//! Product Errors

use vibe_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::AlreadyExists
        | ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => ApiError::bad_request("Invalid product request"),
        ProductsServiceError::Sql(source) => ApiError::internal("Internal server error", &source),
    }
}

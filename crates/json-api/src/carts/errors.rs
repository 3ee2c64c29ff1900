//! Errors

use vibe_app::domain::carts::CartsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        CartsServiceError::NotFound => ApiError::not_found("Cart item not found"),
        CartsServiceError::AlreadyExists
        | CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => ApiError::bad_request("Invalid cart request"),
        CartsServiceError::Sql(source) => ApiError::internal("Internal server error", &source),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn unknown_product_is_not_found() {
        assert_eq!(
            into_api_error(CartsServiceError::ProductNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn overflowing_total_is_bad_request() {
        assert_eq!(
            into_api_error(CartsServiceError::InvalidData).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}

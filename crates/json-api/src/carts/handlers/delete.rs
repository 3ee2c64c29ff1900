//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use vibe_app::domain::carts::records::CartLineUuid;

use crate::{
    carts::{errors::into_api_error, responses::CartResponse},
    envelope::ApiError,
    extensions::*,
    state::State,
};

/// Delete Cart Item Handler
///
/// Removes one line from the cart. Removing a line that is already gone
/// succeeds and returns the current cart.
#[endpoint(tags("cart"), summary = "Delete Cart Item")]
#[tracing::instrument(
    name = "cart.delete",
    skip(req, id, depot),
    fields(owner = tracing::field::Empty, line_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = req.owner();

    let line: CartLineUuid = id
        .into_inner()
        .trim()
        .parse::<Uuid>()
        .map_err(|_ignored| ApiError::bad_request("Invalid cart item ID"))?
        .into();

    let span = tracing::Span::current();

    span.record("owner", tracing::field::display(&owner));
    span.record("line_uuid", tracing::field::display(line));

    let cart = state
        .app
        .carts
        .remove_line(owner, line)
        .await
        .map_err(into_api_error)?;

    tracing::info!(line_uuid = %line, "removed cart line");

    Ok(Json(CartResponse::new("Cart item deleted successfully", cart)))
}

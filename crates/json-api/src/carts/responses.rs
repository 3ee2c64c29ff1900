//! Cart Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vibe_app::domain::carts::models::{Cart, CartLine};

use crate::envelope::Status;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub status: Status,

    pub message: String,

    /// Number of lines in the cart
    pub result: usize,

    pub data: CartData,
}

impl CartResponse {
    pub(crate) fn new(message: &str, cart: Cart) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
            result: cart.len(),
            data: cart.into(),
        }
    }
}

/// Cart lines and their total
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartData {
    pub items: Vec<CartLineResponse>,

    /// Sum of line subtotals in minor currency units
    pub total: u64,
}

impl From<Cart> for CartData {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.lines.into_iter().map(CartLineResponse::from).collect(),
            total: cart.total,
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    /// The cart line identifier, used to remove it
    pub id: Uuid,

    pub product_id: Uuid,

    pub name: Option<String>,

    pub image: Option<String>,

    /// Unit price in minor currency units
    pub price: u64,

    pub qty: u32,

    pub subtotal: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.uuid.into(),
            product_id: line.product_uuid.into(),
            name: line.name,
            image: line.image,
            price: line.unit_price,
            qty: line.quantity,
            subtotal: line.subtotal,
        }
    }
}

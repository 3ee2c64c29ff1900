//! Cart Models

use jiff::Timestamp;

use crate::domain::{
    carts::{data::Owner, records::CartLineUuid},
    products::records::ProductUuid,
};

/// Cart Model, recomputed from its lines on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub owner: Owner,
    pub lines: Vec<CartLine>,
    pub total: u64,
}

impl Cart {
    #[must_use]
    pub fn empty(owner: Owner) -> Self {
        Self {
            owner,
            lines: Vec::new(),
            total: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart Line Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub product_uuid: ProductUuid,
    pub name: Option<String>,
    pub image: Option<String>,
    pub unit_price: u64,
    pub quantity: u32,
    pub subtotal: u64,
}

/// Checkout Receipt Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub receipt_id: String,
    pub name: String,
    pub email: String,
    pub total: u64,
    pub total_formatted: String,
    pub timestamp: Timestamp,
}

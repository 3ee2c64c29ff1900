//! Cart Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Product fields as seen by a cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub image: Option<String>,
}

/// Cart Line Record
///
/// `snapshot` holds the product fields captured when the line was last
/// written; `live` holds the product's current fields, or nothing if the
/// product is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub owner: String,
    pub product_uuid: ProductUuid,
    pub snapshot: ProductSnapshot,
    pub live: ProductSnapshot,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

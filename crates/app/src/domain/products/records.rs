//! Product Records

use jiff::Timestamp;

use crate::{
    query::{Field, FieldKind, Listable, Schema, SortKey},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub category: String,
    pub image: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

const ID: Field = Field::new("id", "uuid", FieldKind::Uuid).filterable();

const NAME: Field = Field::new("name", "name", FieldKind::Text)
    .searchable()
    .filterable()
    .sortable();

const PRICE: Field = Field::new("price", "price", FieldKind::Integer)
    .filterable()
    .sortable();

const CATEGORY: Field = Field::new("category", "category", FieldKind::Text)
    .searchable()
    .filterable()
    .sortable();

const IMAGE: Field = Field::new("image", "image", FieldKind::Text);

const DESCRIPTION: Field = Field::new("description", "description", FieldKind::Text).searchable();

const CREATED_AT: Field = Field::new("createdAt", "created_at", FieldKind::Timestamp)
    .filterable()
    .sortable();

const UPDATED_AT: Field = Field::new("updatedAt", "updated_at", FieldKind::Timestamp)
    .filterable()
    .sortable();

/// Public fields of a product document, newest first by default.
pub const PRODUCT_SCHEMA: Schema = Schema {
    table: "products",
    id: &ID,
    fields: &[
        ID,
        NAME,
        PRICE,
        CATEGORY,
        IMAGE,
        DESCRIPTION,
        CREATED_AT,
        UPDATED_AT,
    ],
    default_sort: SortKey::descending(&CREATED_AT),
};

impl Listable for ProductRecord {
    const SCHEMA: Schema = PRODUCT_SCHEMA;
}

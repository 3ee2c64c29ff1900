//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::{
        data::Owner,
        records::{CartLineRecord, CartLineUuid, ProductSnapshot},
    },
    products::records::{ProductRecord, ProductUuid},
};

const LIST_CART_LINES_SQL: &str = include_str!("../sql/list_cart_lines.sql");
const UPSERT_CART_LINE_SQL: &str = include_str!("../sql/upsert_cart_line.sql");
const DELETE_PRODUCT_LINE_SQL: &str = include_str!("../sql/delete_product_line.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");
const CLEAR_CART_LINES_SQL: &str = include_str!("../sql/clear_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &Owner,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(LIST_CART_LINES_SQL)
            .bind(owner.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert the line, or overwrite its quantity and snapshot if the owner
    /// already has one for this product.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &Owner,
        product: &ProductRecord,
        quantity: u32,
    ) -> Result<u64, sqlx::Error> {
        let price = i64::try_from(product.price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let rows_affected = query(UPSERT_CART_LINE_SQL)
            .bind(CartLineUuid::new().into_uuid())
            .bind(owner.as_str())
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(price)
            .bind(&product.image)
            .bind(i64::from(quantity))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_product_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &Owner,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_LINE_SQL)
            .bind(owner.as_str())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &Owner,
        line: CartLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(owner.as_str())
            .bind(line.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete every line the owner has and return what was removed.
    pub(crate) async fn clear_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: &Owner,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(CLEAR_CART_LINES_SQL)
            .bind(owner.as_str())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i64 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            owner: row.try_get("owner")?,
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            snapshot: ProductSnapshot {
                name: row.try_get("name")?,
                price: try_get_optional_amount(row, "price")?,
                image: row.try_get("image")?,
            },
            live: ProductSnapshot {
                name: row.try_get("product_name")?,
                price: try_get_optional_amount(row, "product_price")?,
                image: row.try_get("product_image")?,
            },
            quantity,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

fn try_get_optional_amount(row: &PgRow, col: &str) -> Result<Option<u64>, sqlx::Error> {
    let amount_i64: Option<i64> = row.try_get(col)?;

    amount_i64
        .map(u64::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

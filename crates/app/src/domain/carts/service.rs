//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            aggregate::aggregate,
            data::{CartUpsert, CheckoutDetails, Owner},
            errors::CartsServiceError,
            models::{Cart, CheckoutReceipt},
            records::CartLineUuid,
            repositories::PgCartLinesRepository,
        },
        products::repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    lines_repository: PgCartLinesRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            lines_repository: PgCartLinesRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, owner: Owner) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let lines = self.lines_repository.list_lines(&mut tx, &owner).await?;

        tx.commit().await?;

        aggregate(owner, lines)
    }

    async fn upsert_item(&self, owner: Owner, upsert: CartUpsert) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .products_repository
            .find_product(&mut tx, upsert.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        if upsert.quantity == 0 {
            self.lines_repository
                .delete_product_line(&mut tx, &owner, product.uuid)
                .await?;
        } else {
            self.lines_repository
                .upsert_line(&mut tx, &owner, &product, upsert.quantity)
                .await?;
        }

        let lines = self.lines_repository.list_lines(&mut tx, &owner).await?;

        tx.commit().await?;

        aggregate(owner, lines)
    }

    async fn remove_line(&self, owner: Owner, line: CartLineUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.lines_repository
            .delete_line(&mut tx, &owner, line)
            .await?;

        let lines = self.lines_repository.list_lines(&mut tx, &owner).await?;

        tx.commit().await?;

        aggregate(owner, lines)
    }

    async fn checkout(
        &self,
        owner: Owner,
        details: CheckoutDetails,
    ) -> Result<CheckoutReceipt, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let removed = self.lines_repository.clear_lines(&mut tx, &owner).await?;

        let cart = aggregate(owner, removed)?;

        tx.commit().await?;

        Ok(CheckoutReceipt::issue(details, &cart, Timestamp::now()))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the owner's cart with subtotals and total.
    async fn get_cart(&self, owner: Owner) -> Result<Cart, CartsServiceError>;

    /// Set the quantity of a product in the owner's cart, creating, updating or
    /// (for a zero quantity) removing its line.
    async fn upsert_item(&self, owner: Owner, upsert: CartUpsert) -> Result<Cart, CartsServiceError>;

    /// Remove one of the owner's lines. Removing a missing line is not an error.
    async fn remove_line(&self, owner: Owner, line: CartLineUuid) -> Result<Cart, CartsServiceError>;

    /// Empty the owner's cart and issue a receipt for what it held.
    async fn checkout(
        &self,
        owner: Owner,
        details: CheckoutDetails,
    ) -> Result<CheckoutReceipt, CartsServiceError>;
}

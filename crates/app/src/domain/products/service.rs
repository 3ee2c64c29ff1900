//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
    query::{ListQuery, Page},
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        query: ListQuery,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_read_snapshot().await?;

        let page = self.repository.list_products(&mut tx, &query).await?;

        tx.commit().await?;

        Ok(page)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        for product in &products {
            product.validate()?;
        }

        let mut tx = self.db.begin_transaction().await?;

        let mut created = Vec::with_capacity(products.len());

        for product in &products {
            created.push(self.repository.create_product(&mut tx, product).await?);
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn count_products(&self) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let count = self.repository.count_products(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Run a list query and return one page of products with the total match count.
    async fn list_products(
        &self,
        query: ListQuery,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Creates several products in one transaction; either all are stored or none.
    async fn create_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Number of stored products.
    async fn count_products(&self) -> Result<u64, ProductsServiceError>;
}

//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::{CartUpsert, Owner},
            models::Cart,
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, price: u64, category: &str) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        image: format!("https://img.example/{}.png", name.to_lowercase().replace(' ', "-")),
        description: String::new(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(name, price, "general"))
        .await
}

pub(crate) async fn set_quantity(
    ctx: &TestContext,
    owner: &Owner,
    product: ProductUuid,
    quantity: u32,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .upsert_item(
            owner.clone(),
            CartUpsert {
                product_uuid: product,
                quantity,
            },
        )
        .await
}

/// Change a product's live price behind the services' back.
pub(crate) async fn set_live_price(
    ctx: &TestContext,
    product: ProductUuid,
    price: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET price = $1, updated_at = now() WHERE uuid = $2")
        .bind(price)
        .bind(product.into_uuid())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}

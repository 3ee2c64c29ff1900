//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use vibe_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            data::Owner,
            models::{Cart, CartLine},
            records::CartLineUuid,
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_create_products().never();
    products.expect_count_products().never();

    products
}

pub(crate) fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_upsert_item().never();
    carts.expect_remove_line().never();
    carts.expect_checkout().never();

    carts
}

fn state(products: MockProductsService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_products_mock(), carts)))
            .push(route),
    )
}

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        name: name.to_string(),
        price,
        category: "electronics".to_string(),
        image: format!("https://img.example.com/{uuid}.png"),
        description: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A cart holding `quantity` of one product at `unit_price`.
pub(crate) fn make_cart(owner: Owner, product: ProductUuid, unit_price: u64, quantity: u32) -> Cart {
    let subtotal = unit_price * u64::from(quantity);

    Cart {
        owner,
        lines: vec![CartLine {
            uuid: CartLineUuid::new(),
            product_uuid: product,
            name: Some("Headphones".to_string()),
            image: None,
            unit_price,
            quantity,
            subtotal,
        }],
        total: subtotal,
    }
}

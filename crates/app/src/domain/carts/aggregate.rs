//! Cart aggregation.
//!
//! The single place cart money is computed, shared by cart reads and checkout.

use crate::domain::carts::{
    data::Owner,
    errors::CartsServiceError,
    models::{Cart, CartLine},
    records::CartLineRecord,
};

impl CartLine {
    /// Price a stored line: the snapshot price wins, then the live product's
    /// price, then zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::InvalidData`] if the subtotal overflows.
    pub fn from_record(record: CartLineRecord) -> Result<Self, CartsServiceError> {
        let CartLineRecord {
            uuid,
            product_uuid,
            snapshot,
            live,
            quantity,
            ..
        } = record;

        let unit_price = snapshot.price.or(live.price).unwrap_or_default();

        let subtotal = unit_price
            .checked_mul(u64::from(quantity))
            .ok_or(CartsServiceError::InvalidData)?;

        Ok(Self {
            uuid,
            product_uuid,
            name: snapshot.name.or(live.name),
            image: snapshot.image.or(live.image),
            unit_price,
            quantity,
            subtotal,
        })
    }
}

/// Build a cart from its stored lines, pricing each and summing the total.
///
/// # Errors
///
/// Returns [`CartsServiceError::InvalidData`] if any amount overflows.
pub fn aggregate(owner: Owner, records: Vec<CartLineRecord>) -> Result<Cart, CartsServiceError> {
    let mut total: u64 = 0;
    let mut lines = Vec::with_capacity(records.len());

    for record in records {
        let line = CartLine::from_record(record)?;

        total = total
            .checked_add(line.subtotal)
            .ok_or(CartsServiceError::InvalidData)?;

        lines.push(line);
    }

    Ok(Cart {
        owner,
        lines,
        total,
    })
}

/// Render minor units as dollars, e.g. `5998` as `$59.98`.
#[must_use]
pub fn format_minor_units(amount: u64) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}

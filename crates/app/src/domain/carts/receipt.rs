//! Checkout receipts.

use jiff::Timestamp;
use rand::{Rng, seq::SliceRandom};

use crate::domain::carts::{
    aggregate::format_minor_units,
    data::CheckoutDetails,
    models::{Cart, CheckoutReceipt},
};

pub const RECEIPT_PREFIX: &str = "rcpt_";

const RECEIPT_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RECEIPT_SUFFIX_LEN: usize = 8;

/// `rcpt_` followed by eight random base-36 characters.
pub fn receipt_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(RECEIPT_PREFIX.len() + RECEIPT_SUFFIX_LEN);
    id.push_str(RECEIPT_PREFIX);

    for _ in 0..RECEIPT_SUFFIX_LEN {
        if let Some(byte) = RECEIPT_ALPHABET.choose(rng) {
            id.push(char::from(*byte));
        }
    }

    id
}

impl CheckoutReceipt {
    /// Issue a receipt for the lines removed from `cart`.
    #[must_use]
    pub fn issue(details: CheckoutDetails, cart: &Cart, timestamp: Timestamp) -> Self {
        Self {
            receipt_id: receipt_id(&mut rand::thread_rng()),
            name: details.name,
            email: details.email,
            total: cart.total,
            total_formatted: format_minor_units(cart.total),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::domain::carts::data::Owner;

    use super::*;

    #[test]
    fn receipt_ids_are_prefixed_base36() {
        let mut rng = StdRng::seed_from_u64(7);

        let id = receipt_id(&mut rng);

        let suffix = id.strip_prefix(RECEIPT_PREFIX).unwrap_or_default();

        assert_eq!(suffix.len(), RECEIPT_SUFFIX_LEN);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
            "unexpected receipt id {id}"
        );
    }

    #[test]
    fn issue_copies_details_and_total() {
        let cart = Cart {
            total: 5_998,
            ..Cart::empty(Owner::guest())
        };

        let receipt = CheckoutReceipt::issue(
            CheckoutDetails {
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
            },
            &cart,
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(receipt.name, "Ada");
        assert_eq!(receipt.email, "ada@example.com");
        assert_eq!(receipt.total, 5_998);
        assert_eq!(receipt.total_formatted, "$59.98");
        assert!(receipt.receipt_id.starts_with(RECEIPT_PREFIX), "missing prefix");
    }
}

//! Cart Data

use std::fmt::{self, Display};

use crate::domain::products::records::ProductUuid;

/// Owner used when a request does not identify one.
pub const GUEST: &str = "guest";

/// The session or user a cart belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    #[must_use]
    pub fn guest() -> Self {
        Self(GUEST.to_owned())
    }

    /// Trimmed identifier, or the guest owner when absent or blank.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(owner) if !owner.is_empty() => Self(owner.to_owned()),
            _ => Self::guest(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set the quantity of one product in a cart. Zero removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpsert {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// Customer details printed on a checkout receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub name: String,
    pub email: String,
}

//! Products Data

use crate::domain::products::{errors::ProductsServiceError, records::ProductUuid};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl NewProduct {
    /// Check the constraints the products table enforces, before touching it.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidData`] for an out of range name
    /// and [`ProductsServiceError::MissingRequiredData`] for a blank category.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        let name_chars = self.name.trim().chars().count();

        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
            return Err(ProductsServiceError::InvalidData);
        }

        if self.category.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        Ok(())
    }
}

//! Carts

pub mod aggregate;
pub mod data;
pub mod errors;
pub mod models;
pub mod receipt;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;

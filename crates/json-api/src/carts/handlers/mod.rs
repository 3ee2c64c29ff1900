//! Cart Handlers

pub(crate) mod checkout;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod upsert;

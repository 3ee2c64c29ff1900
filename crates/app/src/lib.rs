//! Shared application domain and persistence modules.

pub mod catalogue;
pub mod context;
pub mod database;
pub mod domain;
pub mod query;

#[cfg(test)]
mod test;

mod uuids;

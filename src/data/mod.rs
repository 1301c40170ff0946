pub mod error;
pub mod models;
pub mod repo;
pub mod schema;
pub mod store;

#[cfg(test)]
pub mod memory;

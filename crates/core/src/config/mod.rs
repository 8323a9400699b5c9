//! Configuration loading and schema definitions

mod loader;
mod schema;

pub use loader::{Config, CATALOG_ENV};
pub use schema::*;

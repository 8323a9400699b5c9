//! Store catalog: product and employee records with their lookups.
//!
//! This crate provides:
//! - Typed `Product` and `Employee` records
//! - The `Catalog` data context (built-in sample or JSON file)
//! - Product and employee lookups over record slices
//! - Multi-criteria product search with AND/OR and approximate text matching
//! - `Query`/`Outcome` dispatch for front ends
//!
//! # Example
//!
//! ```
//! use techstore_catalog::{Catalog, Outcome, ProductCriteria, Query, Tolerances};
//! use techstore_search::Combinator;
//!
//! let catalog = Catalog::sample();
//! let query = Query::Advanced {
//!     criteria: ProductCriteria::new().brand("apple").available(true),
//!     combinator: Combinator::And,
//!     tolerances: Tolerances::exact(),
//! };
//!
//! if let Outcome::Products(found) = catalog.execute(&query) {
//!     assert_eq!(found.len(), 3);
//! }
//! ```

mod criteria;
mod data;
pub mod employees;
mod error;
mod model;
pub mod products;
mod query;

pub use criteria::{search_products, ProductCriteria, Tolerances};
pub use data::{Catalog, SAMPLE_NUMBERS};
pub use error::{CatalogError, CatalogErrorCode, Result};
pub use model::{Employee, Product};
pub use query::{Outcome, Query};

//! Data model for extracted price lists.

mod catalog;

pub use catalog::{Catalog, LineItem, Package};

//! Game records and the sources that supply them.
//!
//! The fetch pipeline only sees a `GameSource`; the built-in list and a JSON
//! catalog file are the two implementations.

mod model;
mod source;

pub use model::GameRecord;
pub use source::{BuiltinCatalog, CatalogError, GameSource, JsonCatalog};

#[cfg(test)]
mod tests;

//! Configuration loader and schema types.
//!
//! Settings for both commands live here, together with the helpers that
//! locate the config file and layer environment overrides on top of it.

mod load;
mod schema;

pub use schema::*;

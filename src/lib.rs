//! Box art asset fetcher and game list sorter.
//!
//! `boxart fetch` downloads the cover image of every game in a catalog and
//! writes the list back out with a `localBoxArt` path per entry.
//! `boxart sort` orders a JSON game list by its sales figure.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod runtime;
pub mod sort;
pub mod store;

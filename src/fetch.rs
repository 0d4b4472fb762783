//! Box art download pipeline.
//!
//! Each game gets a file name derived from its title and an extension taken
//! from its canonical URL. Downloads run one at a time; a failed download is
//! recorded against that game only and the batch carries on.

mod download;
mod naming;
mod pipeline;

pub use download::{AssetSource, DownloadError, HttpAssetSource};
pub use naming::{canonical_url, extension_for, filename_base};
pub use pipeline::{
    AssetLayout, AssetOutcome, FetchReport, FetchedGame, display_path, fetch_all, fetch_one,
};

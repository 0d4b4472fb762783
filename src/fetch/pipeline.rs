use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::catalog::GameRecord;
use crate::config::FetchSettings;

use super::download::{AssetSource, DownloadError};
use super::naming::{canonical_url, extension_for, filename_base};

/// Result of fetching one record's box art.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetOutcome {
    /// Downloaded; holds the path recorded in `localBoxArt`.
    Saved(String),
    /// Not downloaded; holds a human-readable reason.
    Failed(String),
}

impl AssetOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, AssetOutcome::Saved(_))
    }

    /// Path written to `localBoxArt`. Failures collapse to `placeholder`.
    pub fn local_path<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            AssetOutcome::Saved(path) => path,
            AssetOutcome::Failed(_) => placeholder,
        }
    }
}

/// Where and how downloaded files are laid out on disk.
#[derive(Debug, Clone)]
pub struct AssetLayout {
    pub assets_dir: PathBuf,
    /// Paths recorded in `localBoxArt` are made relative to this directory.
    pub root: PathBuf,
    pub default_extension: String,
    pub placeholder_path: String,
}

impl AssetLayout {
    pub fn from_settings(settings: &FetchSettings, root: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: settings.assets_dir.clone(),
            root: root.into(),
            default_extension: settings.default_extension.clone(),
            placeholder_path: settings.placeholder_path.clone(),
        }
    }

    /// Download target for `game`, or `None` when it has no box art URL.
    ///
    /// Returns the canonical download URL and the destination path.
    pub fn target_for(&self, game: &GameRecord) -> Option<(String, PathBuf)> {
        let url = canonical_url(game.box_art_url()?);
        let ext = extension_for(url, &self.default_extension);
        let dest = self
            .assets_dir
            .join(format!("{}{}", filename_base(game.title().unwrap_or_default()), ext));
        Some((url.to_string(), dest))
    }
}

#[derive(Debug, Clone)]
pub struct FetchedGame {
    pub record: GameRecord,
    pub outcome: AssetOutcome,
}

/// Every input record with its download outcome, in input order.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub games: Vec<FetchedGame>,
}

impl FetchReport {
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn saved(&self) -> usize {
        self.games.iter().filter(|g| g.outcome.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.saved()
    }

    /// The records as they are written out, with `localBoxArt` filled in.
    pub fn records(&self, placeholder: &str) -> Vec<GameRecord> {
        self.games
            .iter()
            .map(|g| g.record.with_local_box_art(g.outcome.local_path(placeholder)))
            .collect()
    }
}

/// Render `path` relative to `root` with forward slashes.
pub fn display_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Download one record's box art. Never fails the batch.
pub fn fetch_one(game: &GameRecord, source: &dyn AssetSource, layout: &AssetLayout) -> AssetOutcome {
    let title = game.title().unwrap_or_default();
    let Some((url, dest)) = layout.target_for(game) else {
        error!("could not download box art for '{}': {}", title, DownloadError::MissingUrl);
        return AssetOutcome::Failed(DownloadError::MissingUrl.to_string());
    };
    debug!("'{}' -> {}", title, dest.display());

    match source.download(&url, &dest) {
        Ok(bytes) => {
            let local = display_path(&dest, &layout.root);
            info!("saved {} ({} bytes)", local, bytes);
            AssetOutcome::Saved(local)
        }
        Err(e) => {
            error!("could not download {}: {}", url, e);
            AssetOutcome::Failed(e.to_string())
        }
    }
}

/// Download box art for every record, sequentially and in order.
///
/// Two titles that normalize to the same file name share one file; the later
/// download overwrites the earlier one.
pub fn fetch_all(
    games: Vec<GameRecord>,
    source: &dyn AssetSource,
    layout: &AssetLayout,
) -> FetchReport {
    let games = games
        .into_iter()
        .map(|record| {
            let outcome = fetch_one(&record, source, layout);
            FetchedGame { record, outcome }
        })
        .collect();
    FetchReport { games }
}

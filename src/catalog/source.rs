use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::GameRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read catalog file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("catalog file '{}' is not a valid game list: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("entry {index} in catalog file '{}' has no string title", path.display())]
    MissingTitle { path: PathBuf, index: usize },
}

/// Supplies a finite sequence of game records.
pub trait GameSource {
    fn games(&self) -> Result<Vec<GameRecord>, CatalogError>;
}

/// The fixed list the asset pipeline was first written against.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl GameSource for BuiltinCatalog {
    fn games(&self) -> Result<Vec<GameRecord>, CatalogError> {
        Ok(vec![
            GameRecord::new(
                "The Legend of Zelda",
                1986,
                7.54,
                "NES",
                "https://static.wikia.nocookie.net/zelda_gamepedia_en/images/0/0c/TLoZ_NES_NA_Box.png/revision/latest?cb=20170404023020",
            ),
            GameRecord::new(
                "Zelda II: The Adventure of Link",
                1987,
                4.97,
                "NES",
                "https://static.wikia.nocookie.net/zelda_gamepedia_en/images/3/33/TAoL_NA_NES_Box_Artwork.png/revision/latest?cb=20180104183449&format=original",
            ),
            GameRecord::new(
                "The Legend of Zelda: Tears of the Kingdom",
                2023,
                22.19,
                "Switch",
                "https://static.wikia.nocookie.net/zelda_gamepedia_en/images/2/26/TotK_English_Box_Art.png/revision/latest/scale-to-width-down/1000?cb=20230727095127&format=original",
            ),
        ])
    }
}

/// Game list read from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameSource for JsonCatalog {
    fn games(&self) -> Result<Vec<GameRecord>, CatalogError> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                CatalogError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let games: Vec<GameRecord> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if let Some(index) = games.iter().position(|g| g.title().is_none()) {
            return Err(CatalogError::MissingTitle {
                path: self.path.clone(),
                index,
            });
        }
        Ok(games)
    }
}

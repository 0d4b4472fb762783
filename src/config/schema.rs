use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/boxart/config.toml` or `~/.config/boxart/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `BOXART__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub sort: SortSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Directory the downloaded box art is written to (created on demand).
    pub assets_dir: PathBuf,
    /// Where the annotated game list is written.
    pub output_file: PathBuf,
    /// Path recorded in `localBoxArt` when a download fails.
    pub placeholder_path: String,
    /// Extension used when the URL path has none. Must include the leading dot.
    pub default_extension: String,
    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Optional JSON catalog to read games from instead of the built-in list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets").join("box-art"),
            output_file: PathBuf::from("assets").join("box-art").join("final-data.json"),
            placeholder_path: "assets/placeholder.png".to_string(),
            default_extension: ".png".to_string(),
            timeout_secs: 10,
            user_agent: concat!("boxart/", env!("CARGO_PKG_VERSION")).to_string(),
            catalog_file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SortSettings {
    /// JSON array to read.
    pub input_file: PathBuf,
    /// Where the sorted array is written.
    pub output_file: PathBuf,
    /// Numeric field used as the sort key.
    pub key: String,
    /// Sort from highest to lowest instead of lowest to highest.
    pub descending: bool,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("zelda_info.json"),
            output_file: PathBuf::from("sorted_zelda_games.json"),
            key: "naSales".to_string(),
            descending: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    ///
    /// Example: "info,reqwest=warn"
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

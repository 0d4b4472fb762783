use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::{BuiltinCatalog, GameSource, JsonCatalog};
use crate::config::{FetchSettings, Settings, SortSettings};
use crate::fetch::{AssetLayout, FetchReport, HttpAssetSource, display_path, fetch_all};
use crate::sort::{SortOrder, sort_file};
use crate::store::write_pretty_json;

/// Download box art for every catalog entry and write the annotated list.
///
/// Per-game download failures end up as placeholders in the output and do not
/// fail the command. Only setup and the final write can.
pub fn fetch(settings: &FetchSettings, catalog: Option<PathBuf>, root: &Path) -> Result<FetchReport> {
    println!("Starting asset download and data preparation...");

    fs::create_dir_all(&settings.assets_dir).with_context(|| {
        format!(
            "could not create assets directory '{}'",
            settings.assets_dir.display()
        )
    })?;
    println!("Created directory: {}", settings.assets_dir.display());

    let games = match catalog.or_else(|| settings.catalog_file.clone()) {
        Some(path) => {
            let source = JsonCatalog::new(path);
            info!("reading games from {}", source.path().display());
            source.games()?
        }
        None => BuiltinCatalog.games()?,
    };

    let source = HttpAssetSource::new(Duration::from_secs(settings.timeout_secs), &settings.user_agent)
        .context("could not build HTTP client")?;
    let layout = AssetLayout::from_settings(settings, root);
    let report = fetch_all(games, &source, &layout);

    let records = report.records(&layout.placeholder_path);
    write_pretty_json(&settings.output_file, &records).with_context(|| {
        format!(
            "could not write game data to '{}'",
            settings.output_file.display()
        )
    })?;

    println!();
    println!(
        "Downloaded {} of {} box art files ({} failed).",
        report.saved(),
        report.len(),
        report.failed()
    );
    println!("   Final data saved to: {}", settings.output_file.display());
    println!(
        "   Local path for the video project: {}",
        display_path(&settings.output_file, root)
    );

    Ok(report)
}

/// Sort the configured game list by sales. Nothing is written on error.
pub fn sort(settings: &SortSettings, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<usize> {
    let input = input.unwrap_or_else(|| settings.input_file.clone());
    let output = output.unwrap_or_else(|| settings.output_file.clone());
    let order = SortOrder::from_descending(settings.descending);

    println!("Attempting to load data from: {}", input.display());
    let count = sort_file(&input, &output, &settings.key, order)?;

    let direction = match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    println!();
    println!(
        "Sorted {} games by '{}' ({}) and saved them to: {}",
        count,
        settings.key,
        direction,
        output.display()
    );
    Ok(count)
}

/// Print the effective settings as TOML.
pub fn show_config(settings: &Settings) -> Result<()> {
    let rendered = settings.to_toml().context("could not render settings")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sort_command_uses_positional_paths() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("games.json");
        let output = dir.path().join("sorted.json");
        fs::write(&input, r#"[{"naSales": 2.0}, {"naSales": 1.0}]"#).unwrap();

        let n = sort(
            &SortSettings::default(),
            Some(input.clone()),
            Some(output.clone()),
        )
        .unwrap();
        assert_eq!(n, 2);

        let sorted: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(sorted[0]["naSales"], serde_json::json!(1.0));
    }

    #[test]
    fn sort_command_reports_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sorted.json");
        let err = sort(
            &SortSettings::default(),
            Some(dir.path().join("zelda_info.json")),
            Some(output.clone()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!output.exists());
    }

    #[test]
    fn fetch_command_writes_placeholders_when_downloads_fail() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("games.json");
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        fs::write(
            &catalog,
            format!(
                r#"[
  {{"title": "Unreachable", "year": 2000, "naSales": 1.5, "platform": "GC", "boxArtUrl": "http://127.0.0.1:{port}/box.png"}},
  {{"title": "No URL", "year": 2001, "naSales": 2.5, "platform": "GC"}}
]"#
            ),
        )
        .unwrap();

        let settings = FetchSettings {
            assets_dir: dir.path().join("assets").join("box-art"),
            output_file: dir.path().join("assets").join("box-art").join("final-data.json"),
            timeout_secs: 2,
            ..FetchSettings::default()
        };

        let report = fetch(&settings, Some(catalog), dir.path()).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.failed(), 2);

        let written: Vec<crate::catalog::GameRecord> =
            serde_json::from_str(&fs::read_to_string(&settings.output_file).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(
            written
                .iter()
                .all(|g| g.local_box_art() == Some("assets/placeholder.png"))
        );
    }

    #[test]
    fn fetch_command_fails_on_missing_catalog() {
        let dir = tempdir().unwrap();
        let settings = FetchSettings {
            assets_dir: dir.path().join("assets"),
            output_file: dir.path().join("assets").join("final-data.json"),
            ..FetchSettings::default()
        };
        let err = fetch(&settings, Some(dir.path().join("missing.json")), dir.path()).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!settings.output_file.exists());
    }
}

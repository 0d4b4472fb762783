use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn builtin_catalog_has_the_three_zelda_entries() {
    let games = BuiltinCatalog.games().unwrap();
    let titles: Vec<&str> = games.iter().filter_map(|g| g.title()).collect();
    assert_eq!(
        titles,
        vec![
            "The Legend of Zelda",
            "Zelda II: The Adventure of Link",
            "The Legend of Zelda: Tears of the Kingdom",
        ]
    );
    assert!(games.iter().all(|g| g.box_art_url().is_some()));
    assert!(games.iter().all(|g| g.local_box_art().is_none()));
    assert_eq!(games[2].na_sales(), Some(22.19));
}

#[test]
fn new_record_serializes_in_catalog_field_order() {
    let game = GameRecord::new("The Legend of Zelda", 1986, 7.54, "NES", "https://x/a.png")
        .with_local_box_art("assets/box-art/the_legend_of_zelda.png");
    let json = serde_json::to_string(&game).unwrap();
    assert_eq!(
        json,
        r#"{"title":"The Legend of Zelda","year":1986,"naSales":7.54,"platform":"NES","boxArtUrl":"https://x/a.png","localBoxArt":"assets/box-art/the_legend_of_zelda.png"}"#
    );
}

#[test]
fn record_without_local_path_omits_the_field() {
    let game = GameRecord::new("Zelda", 1986, 1.0, "NES", "https://x/a.png");
    let json = serde_json::to_string(&game).unwrap();
    assert!(!json.contains("localBoxArt"));
}

#[test]
fn catalog_round_trip_only_appends_local_box_art() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.json");
    let entry = r#"{"platform":"GC","title":"A","year":2004,"naSales":1,"boxArtUrl":"https://x/a.jpg","developer":"Nintendo EAD"}"#;
    fs::write(&path, format!("[{entry}]")).unwrap();

    let games = JsonCatalog::new(&path).games().unwrap();
    let untouched = serde_json::to_string(&games[0]).unwrap();
    assert_eq!(untouched, entry);

    let annotated = serde_json::to_string(&games[0].with_local_box_art("assets/box-art/a.jpg")).unwrap();
    assert_eq!(
        annotated,
        r#"{"platform":"GC","title":"A","year":2004,"naSales":1,"boxArtUrl":"https://x/a.jpg","developer":"Nintendo EAD","localBoxArt":"assets/box-art/a.jpg"}"#
    );
}

#[test]
fn existing_local_box_art_is_replaced_in_place() {
    let mut fields = serde_json::Map::new();
    fields.insert("title".into(), "A".into());
    fields.insert("localBoxArt".into(), "old.png".into());
    fields.insert("year".into(), 2000.into());
    let game = GameRecord::from(fields).with_local_box_art("new.png");

    assert_eq!(
        serde_json::to_string(&game).unwrap(),
        r#"{"title":"A","localBoxArt":"new.png","year":2000}"#
    );
}

#[test]
fn json_catalog_reads_records_without_box_art_url() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.json");
    fs::write(
        &path,
        r#"[
  {"title": "Spirit Tracks", "year": 2009, "naSales": 2.96, "platform": "DS", "boxArtUrl": "Spirit_Tracks_Cover.jpg"},
  {"title": "Four Swords Adventures", "year": 2004, "naSales": 1, "platform": "GC"}
]"#,
    )
    .unwrap();

    let games = JsonCatalog::new(&path).games().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].box_art_url(), Some("Spirit_Tracks_Cover.jpg"));
    assert_eq!(games[1].na_sales(), Some(1.0));
    assert!(games[1].box_art_url().is_none());
}

#[test]
fn json_catalog_rejects_entries_without_title() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.json");
    fs::write(&path, r#"[{"title": "A"}, {"year": 2004}]"#).unwrap();

    let err = JsonCatalog::new(&path).games().unwrap_err();
    assert!(matches!(err, CatalogError::MissingTitle { index: 1, .. }));
}

#[test]
fn json_catalog_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = JsonCatalog::new(dir.path().join("nope.json"))
        .games()
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[test]
fn json_catalog_reports_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.json");
    fs::write(&path, "[{\"title\": ").unwrap();

    let err = JsonCatalog::new(&path).games().unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));

    fs::write(&path, "[1, 2]").unwrap();
    let err = JsonCatalog::new(&path).games().unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

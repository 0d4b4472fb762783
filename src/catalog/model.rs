use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const TITLE: &str = "title";
pub const BOX_ART_URL: &str = "boxArtUrl";
pub const LOCAL_BOX_ART: &str = "localBoxArt";

/// One game entry.
///
/// Held as the ordered JSON object it was read from, so numbers and key order
/// come back out exactly as they went in. Only `localBoxArt` is ever added.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GameRecord {
    fields: Map<String, Value>,
}

impl GameRecord {
    pub fn new(title: &str, year: i32, na_sales: f64, platform: &str, box_art_url: &str) -> Self {
        let value = json!({
            "title": title,
            "year": year,
            "naSales": na_sales,
            "platform": platform,
            "boxArtUrl": box_art_url,
        });
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field(TITLE)
    }

    pub fn box_art_url(&self) -> Option<&str> {
        self.str_field(BOX_ART_URL)
    }

    pub fn local_box_art(&self) -> Option<&str> {
        self.str_field(LOCAL_BOX_ART)
    }

    /// North American sales, in millions.
    pub fn na_sales(&self) -> Option<f64> {
        self.fields.get("naSales").and_then(Value::as_f64)
    }

    /// Copy of this record with `localBoxArt` set.
    ///
    /// The field is appended last; an existing `localBoxArt` keeps its place.
    pub fn with_local_box_art(&self, path: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(LOCAL_BOX_ART.to_string(), Value::String(path.into()));
        Self { fields }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for GameRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

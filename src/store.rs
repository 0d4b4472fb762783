//! JSON output shared by both commands.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Write `value` to `path` as JSON indented with two spaces.
///
/// The file is truncated and written in place, not via a temp file.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn writes_two_space_indentation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_pretty_json(&path, &json!([{"title": "Zelda", "naSales": 7.54}])).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"title\": \"Zelda\",\n    \"naSales\": 7.54\n  }\n]"
        );
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(write_pretty_json(&path, &json!([])).is_err());
    }
}

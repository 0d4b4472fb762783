//! Stable numeric sort of a JSON game list.
//!
//! Documents are kept as ordered JSON objects so that fields other than the
//! sort key pass through untouched, in their original order.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

pub type Document = Map<String, Value>;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("input file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not decode JSON data in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("entry {index} has no numeric '{key}' field")]
    MissingKey { index: usize, key: String },
    #[error("could not write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Load a JSON array of objects.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, SortError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SortError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SortError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&text).map_err(|source| SortError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Sort `docs` in place by the number stored under `key`.
///
/// The sort is stable and has no tie-break: documents with equal keys keep
/// their input order in both directions. Nothing is reordered when any
/// document lacks a numeric `key`.
pub fn sort_by_key(docs: &mut [Document], key: &str, order: SortOrder) -> Result<(), SortError> {
    if let Some(index) = docs.iter().position(|d| numeric_key(d, key).is_none()) {
        return Err(SortError::MissingKey {
            index,
            key: key.to_string(),
        });
    }

    docs.sort_by(|a, b| {
        let a = numeric_key(a, key).unwrap_or_default();
        let b = numeric_key(b, key).unwrap_or_default();
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    Ok(())
}

fn numeric_key(doc: &Document, key: &str) -> Option<f64> {
    doc.get(key).and_then(Value::as_f64)
}

/// Write `docs` as a 2-space indented JSON array.
pub fn write_documents(path: &Path, docs: &[Document]) -> Result<(), SortError> {
    crate::store::write_pretty_json(path, &docs).map_err(|source| SortError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `input`, sort it and write it to `output`.
///
/// Returns the number of documents written. On error nothing is written.
pub fn sort_file(input: &Path, output: &Path, key: &str, order: SortOrder) -> Result<usize, SortError> {
    let mut docs = load_documents(input)?;
    sort_by_key(&mut docs, key, order)?;
    write_documents(output, &docs)?;
    Ok(docs.len())
}

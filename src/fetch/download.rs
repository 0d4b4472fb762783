use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("no box art URL")]
    MissingUrl,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("could not write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Fetches one remote file into a local path.
pub trait AssetSource {
    /// Download `url` into `dest`, returning the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError>;
}

/// Blocking HTTP(S) downloader. One request at a time, bounded by a timeout.
pub struct HttpAssetSource {
    client: Client,
}

impl HttpAssetSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl AssetSource for HttpAssetSource {
    /// The body is streamed into a temp file next to `dest` and renamed over
    /// it only once complete. A failed download leaves `dest` untouched.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let mut resp = self.client.get(url).send()?;

        let status = resp.status();
        debug!("GET {} status={}", url, status.as_u16());
        if !status.is_success() {
            return Err(DownloadError::Status(status));
        }

        let write_err = |source: io::Error| DownloadError::Write {
            path: dest.to_path_buf(),
            source,
        };

        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut writer = BufWriter::new(NamedTempFile::new_in(dir).map_err(write_err)?);

        let bytes = resp.copy_to(&mut writer)?;
        let tmp = writer
            .into_inner()
            .map_err(|e| write_err(e.into_error()))?;
        tmp.persist(dest).map_err(|e| write_err(e.error))?;
        Ok(bytes)
    }
}

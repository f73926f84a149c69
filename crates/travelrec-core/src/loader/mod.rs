// crates/travelrec-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (HTTP, files, decompression) behind the
//! [`DatasetSource`] trait and turns the bytes into a [`RawDataset`].
//!
//! Loading never retries on its own. Storing the result is the job of
//! [`crate::store::DatasetStore::load`].

use crate::error::{Result, TravelError};
use crate::raw::RawDataset;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

mod common_io;
mod file;
#[cfg(feature = "fetch")]
mod http;

pub use file::FileSource;
#[cfg(feature = "fetch")]
pub use http::HttpSource;

/// Fixed name of the dataset resource, resolved relative to the caller.
pub const DEFAULT_DATA_FILE: &str = "travel_recommendation_api.json";

/// Where the dataset bytes come from.
///
/// A source always points at one fixed resource; `fetch` is called once per
/// load attempt.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable resource name for logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: DatasetSource + ?Sized> DatasetSource for Arc<S> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parse a dataset document. Anything that is not the expected JSON shape is
/// a [`TravelError::Parse`].
pub fn parse_dataset(bytes: &[u8]) -> Result<RawDataset> {
    Ok(serde_json::from_slice(bytes)?)
}

/// In-memory document, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        StaticSource {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<static {} bytes>", self.bytes.len())
    }
}

/// A dataset location as given on the command line or in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(Url),
    Path(PathBuf),
}

impl SourceLocation {
    /// `http://` and `https://` locations are URLs; everything else is a path.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(TravelError::InvalidLocation {
                location: location.to_owned(),
                reason: "empty location".into(),
            });
        }

        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location).map_err(|e| TravelError::InvalidLocation {
                location: location.to_owned(),
                reason: e.to_string(),
            })?;
            Ok(SourceLocation::Url(url))
        } else {
            Ok(SourceLocation::Path(PathBuf::from(location)))
        }
    }

    /// The sample dataset shipped in this crate's `data/` directory.
    pub fn bundled() -> Self {
        SourceLocation::Path(default_data_dir().join(DEFAULT_DATA_FILE))
    }

    pub fn into_source(self) -> Result<Box<dyn DatasetSource>> {
        match self {
            #[cfg(feature = "fetch")]
            SourceLocation::Url(url) => Ok(Box::new(HttpSource::new(url))),
            #[cfg(not(feature = "fetch"))]
            SourceLocation::Url(url) => Err(TravelError::InvalidLocation {
                location: url.to_string(),
                reason: "HTTP sources require the 'fetch' feature".into(),
            }),
            SourceLocation::Path(path) => Ok(Box::new(FileSource::new(path))),
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::Path(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{url}"),
            SourceLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

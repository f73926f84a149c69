// crates/travelrec-core/src/loader/file.rs
use super::{common_io, DatasetSource};
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the dataset from a local file (`.json` or `.json.gz`).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        common_io::read_all(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// crates/travelrec-core/src/loader/http.rs
use super::DatasetSource;
use crate::error::{Result, TravelError};
use async_trait::async_trait;
use url::Url;

/// Fetches the dataset with a single HTTP GET.
///
/// No timeout is applied: a server that never answers keeps the load (and any
/// query waiting on it) pending.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        HttpSource {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TravelError::Load {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

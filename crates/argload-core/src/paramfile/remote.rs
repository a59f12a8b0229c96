//! `http://` and `https://` loader.

use super::Loader;
use crate::error::ResourceLoadingError;
use crate::http::{CurlClient, HttpClient};
use crate::value::LoadedContent;
use std::fmt;
use std::sync::Arc;

/// Fetches the full URL (prefix included) and returns the body as text.
#[derive(Clone)]
pub struct UrlLoader {
    client: Arc<dyn HttpClient>,
}

impl UrlLoader {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub fn curl() -> Self {
        Self::new(Arc::new(CurlClient::default()))
    }
}

impl fmt::Debug for UrlLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlLoader").finish_non_exhaustive()
    }
}

impl Loader for UrlLoader {
    fn load(&self, _prefix: &str, url: &str) -> Result<LoadedContent, ResourceLoadingError> {
        let response = self.client.get(url).map_err(|e| {
            ResourceLoadingError::new(format!("Unable to retrieve {}: {:#}", url, e))
        })?;
        if response.status != 200 {
            return Err(ResourceLoadingError::new(format!(
                "Unable to retrieve {}: received non 200 status code of {}",
                url, response.status
            )));
        }
        Ok(LoadedContent::Text(response.text()))
    }
}

//! Blocking HTTP GET used by the `http://` and `https://` loaders.
//!
//! Uses the curl crate (libcurl). The `HttpClient` trait is the seam that
//! lets tests substitute canned responses.

use anyhow::{Context, Result};
use std::time::Duration;

/// Status code and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body decoded as UTF-8; invalid sequences are replaced, never rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a blocking GET and reports the status and body.
///
/// Transport failures (DNS, connection refused, timeout) are errors; any
/// HTTP status, including 4xx/5xx, is a successful response.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// libcurl-backed client. Follows redirects.
#[derive(Debug, Clone, Copy)]
pub struct CurlClient {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlClient {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("GET request failed")?;
        }

        let status = easy.response_code().context("no response code")?;
        tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

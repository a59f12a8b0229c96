//! Canned HTTP client shared by unit tests.

use crate::http::{HttpClient, HttpResponse};
use anyhow::Result;
use std::sync::{Arc, Mutex};

enum Reply {
    Status(u32, &'static str),
    Fail(&'static str),
}

/// Records every requested URL and answers with a fixed reply.
pub(crate) struct StubClient {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub(crate) fn ok(body: &'static str) -> Arc<Self> {
        Self::status(200, body)
    }

    pub(crate) fn status(code: u32, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(code, body),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpClient for StubClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.reply {
            Reply::Status(status, body) => Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            Reply::Fail(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

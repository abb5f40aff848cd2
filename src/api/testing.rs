//! In-crate fake transport for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::{HttpRequest, HttpResponse, Transport, TransportError};

/// Answers every request with one canned response and records what was sent.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Returns the only request sent, panicking if there was not exactly one.
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::new(
            self.status,
            HashMap::new(),
            self.body.clone(),
        ))
    }
}

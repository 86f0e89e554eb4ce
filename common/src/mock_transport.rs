// Backblaze B2 Rust Library
// Copyright 2025 backblaze-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use backblaze::b2::error::NetworkError;
use backblaze::b2::header_constants::{APPLICATION_JSON, CONTENT_TYPE};
use backblaze::b2::transport::{HttpRequest, HttpResponse, Transport};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// One scripted outcome of [`MockTransport::send`].
#[derive(Clone, Debug)]
pub enum MockReply {
    Response {
        status: StatusCode,
        body: Bytes,
        delay: Option<Duration>,
    },
    NetworkFailure(String),
}

impl MockReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub fn raw(status: u16, body: &str) -> Self {
        MockReply::Response {
            status: StatusCode::from_u16(status).unwrap(),
            body: Bytes::copy_from_slice(body.as_bytes()),
            delay: None,
        }
    }

    pub fn network_failure(message: &str) -> Self {
        MockReply::NetworkFailure(message.to_string())
    }

    /// Holds the reply back for `delay` before handing it out.
    pub fn with_delay(self, delay: Duration) -> Self {
        match self {
            MockReply::Response { status, body, .. } => MockReply::Response {
                status,
                body,
                delay: Some(delay),
            },
            other => other,
        }
    }
}

/// Transport replaying scripted replies in order and recording every request.
///
/// Running out of replies is reported as a connection failure.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        log::debug!("mock transport: {} {}", request.method, request.url);
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            None => Err(NetworkError::ConnectionFailed(
                "no scripted reply left".to_string(),
            )),
            Some(MockReply::NetworkFailure(message)) => Err(NetworkError::ConnectionFailed(message)),
            Some(MockReply::Response {
                status,
                body,
                delay,
            }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Ok(HttpResponse {
                    status,
                    headers,
                    body,
                })
            }
        }
    }
}

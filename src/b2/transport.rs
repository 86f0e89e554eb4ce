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

//! HTTP transport abstraction
//!
//! Request generation produces an [`HttpRequest`] descriptor; a [`Transport`]
//! turns it into an [`HttpResponse`]. The default transport is backed by
//! `reqwest`; tests substitute their own implementation.

use crate::b2::error::NetworkError;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::fmt::Debug;

/// A fully formed HTTP request, ready to be sent.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A buffered HTTP response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Sends the request and buffers the whole response body.
    ///
    /// Any status code is a successful round trip here; interpreting error
    /// statuses is left to the caller.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;
}

/// [`Transport`] backed by a shared `reqwest` connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let resp = self
            .http_client
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

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

//! Error types returned by every B2 operation

use crate::b2::b2_error_response::B2ErrorResponse;
use bytes::Bytes;
use thiserror::Error;

/// Caller-supplied arguments or configuration that violate a precondition.
///
/// These are raised while the request is being generated, so no network call
/// has been made when one is returned.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("bucket name cannot be empty")]
    EmptyBucketName,

    #[error("bucket id cannot be empty")]
    EmptyBucketId,

    #[error("bucket id is required unless the client persists a default bucket")]
    MissingBucketId,

    #[error("client is configured to persist a bucket but no bucket id was set")]
    MissingPersistedBucketId,

    #[error("no credential provider was configured")]
    MissingCredentials,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("failed to serialize request body: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
}

/// Failures of the underlying transport.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("transport error: {0}")]
    Transport(#[from] NetworkError),

    #[error("{0}")]
    Api(Box<B2ErrorResponse>),

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: Bytes,
    },

    #[error("operation was cancelled")]
    Cancelled,
}

impl From<B2ErrorResponse> for Error {
    fn from(err: B2ErrorResponse) -> Self {
        Error::Api(Box::new(err))
    }
}

impl Error {
    /// Returns the provider error if this is an API failure.
    pub fn api_error(&self) -> Option<&B2ErrorResponse> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

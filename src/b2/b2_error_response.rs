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

//! Provider error payloads and the response error check

use crate::b2::error::Error;
use crate::b2::header_constants::RETRY_AFTER;
use crate::b2::transport::HttpResponse;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::convert::Infallible;
use std::str::FromStr;
use std::time::Duration;

/// Error codes returned by the B2 API in the `code` field of an error body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum B2ErrorCode {
    /// The request had the wrong fields or illegal values
    BadRequest,
    /// The bucket id does not exist or is malformed
    BadBucketId,
    /// The auth token is valid but does not allow this call
    Unauthorized,
    /// The auth token is not valid
    BadAuthToken,
    /// The auth token has expired; a new one must be issued
    ExpiredAuthToken,
    /// Access to the account or bucket is denied
    AccessDenied,
    /// The account has a transaction or storage cap that was reached
    TransactionCapExceeded,
    /// A bucket with that name already exists
    DuplicateBucketName,
    /// The account already has the maximum number of buckets
    TooManyBuckets,
    /// The bucket still holds at least one file version
    CannotDeleteNonEmptyBucket,
    NotFound,
    /// The revision passed in `ifRevisionIs` did not match
    Conflict,
    /// Rate limited; retry after the interval in `Retry-After`
    TooManyRequests,
    InternalError,
    ServiceUnavailable,

    #[default]
    Unknown,

    OtherError(String), // catch-all for codes not listed above
}

#[allow(dead_code)]
const ALL_B2_ERROR_CODE: &[B2ErrorCode] = &[
    B2ErrorCode::BadRequest,
    B2ErrorCode::BadBucketId,
    B2ErrorCode::Unauthorized,
    B2ErrorCode::BadAuthToken,
    B2ErrorCode::ExpiredAuthToken,
    B2ErrorCode::AccessDenied,
    B2ErrorCode::TransactionCapExceeded,
    B2ErrorCode::DuplicateBucketName,
    B2ErrorCode::TooManyBuckets,
    B2ErrorCode::CannotDeleteNonEmptyBucket,
    B2ErrorCode::NotFound,
    B2ErrorCode::Conflict,
    B2ErrorCode::TooManyRequests,
    B2ErrorCode::InternalError,
    B2ErrorCode::ServiceUnavailable,
    B2ErrorCode::Unknown,
];

impl B2ErrorCode {
    /// Code to use when the server sent no parsable error body.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => B2ErrorCode::BadRequest,
            401 => B2ErrorCode::Unauthorized,
            403 => B2ErrorCode::AccessDenied,
            404 => B2ErrorCode::NotFound,
            409 => B2ErrorCode::Conflict,
            429 => B2ErrorCode::TooManyRequests,
            500 => B2ErrorCode::InternalError,
            503 => B2ErrorCode::ServiceUnavailable,
            _ => B2ErrorCode::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            B2ErrorCode::BadRequest => "bad_request",
            B2ErrorCode::BadBucketId => "bad_bucket_id",
            B2ErrorCode::Unauthorized => "unauthorized",
            B2ErrorCode::BadAuthToken => "bad_auth_token",
            B2ErrorCode::ExpiredAuthToken => "expired_auth_token",
            B2ErrorCode::AccessDenied => "access_denied",
            B2ErrorCode::TransactionCapExceeded => "transaction_cap_exceeded",
            B2ErrorCode::DuplicateBucketName => "duplicate_bucket_name",
            B2ErrorCode::TooManyBuckets => "too_many_buckets",
            B2ErrorCode::CannotDeleteNonEmptyBucket => "cannot_delete_non_empty_bucket",
            B2ErrorCode::NotFound => "not_found",
            B2ErrorCode::Conflict => "conflict",
            B2ErrorCode::TooManyRequests => "too_many_requests",
            B2ErrorCode::InternalError => "internal_error",
            B2ErrorCode::ServiceUnavailable => "service_unavailable",
            B2ErrorCode::Unknown => "unknown",
            B2ErrorCode::OtherError(v) => v,
        }
    }
}

impl FromStr for B2ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bad_request" => B2ErrorCode::BadRequest,
            "bad_bucket_id" => B2ErrorCode::BadBucketId,
            "unauthorized" => B2ErrorCode::Unauthorized,
            "bad_auth_token" => B2ErrorCode::BadAuthToken,
            "expired_auth_token" => B2ErrorCode::ExpiredAuthToken,
            "access_denied" => B2ErrorCode::AccessDenied,
            "transaction_cap_exceeded" => B2ErrorCode::TransactionCapExceeded,
            "duplicate_bucket_name" => B2ErrorCode::DuplicateBucketName,
            "too_many_buckets" => B2ErrorCode::TooManyBuckets,
            "cannot_delete_non_empty_bucket" => B2ErrorCode::CannotDeleteNonEmptyBucket,
            "not_found" => B2ErrorCode::NotFound,
            "conflict" => B2ErrorCode::Conflict,
            "too_many_requests" => B2ErrorCode::TooManyRequests,
            "internal_error" => B2ErrorCode::InternalError,
            "service_unavailable" => B2ErrorCode::ServiceUnavailable,
            "unknown" => B2ErrorCode::Unknown,
            v => B2ErrorCode::OtherError(v.to_owned()),
        })
    }
}

impl std::fmt::Display for B2ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body as sent by the server: `{"status": 400, "code": "...", "message": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Typed failure returned when the B2 API answers with a non-success status.
#[derive(Clone, Debug)]
pub struct B2ErrorResponse {
    status: StatusCode,
    code: B2ErrorCode,
    message: String,
    headers: HeaderMap,
}

impl B2ErrorResponse {
    pub fn new(status: StatusCode, code: B2ErrorCode, message: String, headers: HeaderMap) -> Self {
        Self {
            status,
            code,
            message,
            headers,
        }
    }

    /// Builds the error from a failed response.
    ///
    /// When the body is not a B2 error document, the code is derived from the
    /// status and the raw body text becomes the message.
    pub fn from_response(resp: HttpResponse) -> Self {
        let HttpResponse {
            status,
            headers,
            body,
        } = resp;

        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(ErrorBody {
                code: Some(code),
                message,
            }) => Self {
                status,
                code: code.parse().unwrap_or_default(),
                message: message.unwrap_or_default(),
                headers,
            },
            _ => Self {
                status,
                code: B2ErrorCode::from_status(status),
                message: String::from_utf8_lossy(&body).trim().to_string(),
                headers,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
    pub fn code(&self) -> &B2ErrorCode {
        &self.code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether the failure is one a caller may reasonably retry later.
    ///
    /// This client never retries on its own.
    pub fn is_transient(&self) -> bool {
        matches!(
            self.code,
            B2ErrorCode::TooManyRequests | B2ErrorCode::ServiceUnavailable | B2ErrorCode::InternalError
        ) || self.status == StatusCode::TOO_MANY_REQUESTS
            || self.status.is_server_error()
    }

    /// Delay the server asked for before trying again, from `Retry-After`.
    ///
    /// Only the delay-seconds form is understood.
    pub fn retry_after(&self) -> Option<Duration> {
        self.headers
            .get(RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }
}

impl std::fmt::Display for B2ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "B2 operation failed: status {}, code: {}, message: {:?}",
            self.status.as_u16(),
            self.code,
            self.message,
        )
    }
}

impl std::error::Error for B2ErrorResponse {}

/// Fails with [`Error::Api`] unless the response carries a success status.
///
/// Runs before any attempt to decode the body, so an error document is never
/// mistaken for a success payload.
pub fn check_response(resp: HttpResponse) -> Result<HttpResponse, Error> {
    if resp.status.is_success() {
        return Ok(resp);
    }

    let err = B2ErrorResponse::from_response(resp);
    log::warn!(
        "B2 API returned {} ({}): {}",
        err.status().as_u16(),
        err.code(),
        err.message()
    );
    Err(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn response(status: u16, body: &'static str) -> HttpResponse {
        HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_b2_error_code_roundtrip() {
        for code in ALL_B2_ERROR_CODE {
            let str = code.to_string();
            let code_obs: B2ErrorCode = str.parse().unwrap();
            assert_eq!(
                code_obs, *code,
                "Failed B2ErrorCode round-trip: code {code} -> str '{str}' -> code {code_obs}"
            );
        }
    }

    #[test]
    fn test_unlisted_code_is_preserved() {
        let code: B2ErrorCode = "storage_cap_exceeded".parse().unwrap();
        assert_eq!(code, B2ErrorCode::OtherError("storage_cap_exceeded".into()));
        assert_eq!(code.to_string(), "storage_cap_exceeded");
    }

    #[test]
    fn test_success_passes_through() {
        let resp = check_response(response(200, r#"{"buckets":[]}"#)).unwrap();
        assert_eq!(resp.body, Bytes::from_static(br#"{"buckets":[]}"#));
    }

    #[test]
    fn test_error_body_is_parsed() {
        let err = check_response(response(
            400,
            r#"{"status":400,"code":"duplicate_bucket_name","message":"Bucket name is already in use."}"#,
        ))
        .unwrap_err();

        let api = err.api_error().expect("expected api error");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.code(), &B2ErrorCode::DuplicateBucketName);
        assert_eq!(api.message(), "Bucket name is already in use.");
        assert!(!api.is_transient());
    }

    #[test]
    fn test_non_json_error_body_falls_back_to_status() {
        let err = check_response(response(503, "upstream unavailable\n")).unwrap_err();
        let api = err.api_error().expect("expected api error");
        assert_eq!(api.code(), &B2ErrorCode::ServiceUnavailable);
        assert_eq!(api.message(), "upstream unavailable");
        assert!(api.is_transient());
    }

    #[test]
    fn test_retry_after_header() {
        let mut resp = response(
            429,
            r#"{"status":429,"code":"too_many_requests","message":"slow down"}"#,
        );
        resp.headers.insert(RETRY_AFTER, "7".parse().unwrap());
        let err = check_response(resp).unwrap_err();
        let api = err.api_error().expect("expected api error");
        assert!(api.is_transient());
        assert_eq!(api.retry_after(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_retry_after_absent_or_http_date() {
        let err = check_response(response(503, "")).unwrap_err();
        assert_eq!(err.api_error().unwrap().retry_after(), None);

        let mut resp = response(503, "");
        resp.headers.insert(
            RETRY_AFTER,
            "Wed, 21 Oct 2026 07:28:00 GMT".parse().unwrap(),
        );
        let err = check_response(resp).unwrap_err();
        assert_eq!(err.api_error().unwrap().retry_after(), None);
    }

    #[test]
    fn test_empty_error_body() {
        let err = check_response(response(401, "")).unwrap_err();
        let api = err.api_error().expect("expected api error");
        assert_eq!(api.code(), &B2ErrorCode::Unauthorized);
        assert!(api.message().is_empty());
    }

    #[test]
    fn test_bucket_shaped_error_body_is_still_an_error() {
        // a body that would decode as a bucket must not be treated as success
        let err = check_response(response(
            409,
            r#"{"bucketId":"b1","bucketName":"photos","bucketType":"allPrivate"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.api_error().unwrap().code(), &B2ErrorCode::Conflict);
    }

    quickcheck! {
        fn prop_non_success_status_is_api_error(status: u16) -> bool {
            let status = 300 + status % 300;
            let resp = HttpResponse {
                status: StatusCode::from_u16(status).unwrap(),
                headers: HeaderMap::new(),
                body: Bytes::from_static(br#"{"bucketId":"b1","bucketName":"x","bucketType":"allPublic"}"#),
            };
            matches!(check_response(resp), Err(Error::Api(_)))
        }
    }
}

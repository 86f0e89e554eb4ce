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

use crate::b2::error::{Error, ValidationErr};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Checks that a bucket name was supplied.
///
/// Naming rules are enforced by the server; only emptiness is rejected here.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.is_empty() {
        return Err(ValidationErr::EmptyBucketName);
    }
    Ok(())
}

pub fn check_bucket_id(bucket_id: &str) -> Result<(), ValidationErr> {
    if bucket_id.is_empty() {
        return Err(ValidationErr::EmptyBucketId);
    }
    Ok(())
}

/// Decodes a JSON response body into `T`.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        source,
        body: body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("photos").is_ok());
        assert!(matches!(
            check_bucket_name(""),
            Err(ValidationErr::EmptyBucketName)
        ));
        // naming rules beyond emptiness are left to the server
        assert!(check_bucket_name("   ").is_ok());
    }

    #[test]
    fn test_check_bucket_id() {
        assert!(check_bucket_id("b1").is_ok());
        assert!(matches!(
            check_bucket_id(""),
            Err(ValidationErr::EmptyBucketId)
        ));
    }

    #[test]
    fn test_decode_json_keeps_body_on_error() {
        let body = Bytes::from_static(b"<html>oops</html>");
        match decode_json::<serde_json::Value>(&body) {
            Err(Error::Decode { body: kept, .. }) => assert_eq!(kept, body),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}

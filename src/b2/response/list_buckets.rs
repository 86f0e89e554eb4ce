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

//! Response type for the `b2_list_buckets` operation
//!
//! ## Response Schema
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `buckets` | `array[Bucket]` | Buckets matching the request, in server order |

use crate::b2::error::Error;
use crate::b2::transport::HttpResponse;
use crate::b2::types::{B2Request, Bucket, FromB2Response};
use crate::b2::utils::decode_json;
use crate::impl_has_b2fields;
use http::HeaderMap;
use serde::Deserialize;

/// Response of
/// [list_buckets()](crate::b2::B2Client::list_buckets)
/// API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: B2Request,
    headers: HeaderMap,
    buckets: Vec<Bucket>,
}

impl ListBucketsResponse {
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}

impl_has_b2fields!(ListBucketsResponse);

#[derive(Deserialize)]
struct BucketsWrapper {
    buckets: Vec<Bucket>,
}

impl FromB2Response for ListBucketsResponse {
    fn from_b2response(
        request: B2Request,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let wrapper: BucketsWrapper = decode_json(&resp.body)?;
        Ok(Self {
            request,
            headers: resp.headers,
            buckets: wrapper.buckets,
        })
    }
}

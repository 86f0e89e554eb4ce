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

use crate::b2::client::B2Client;
use crate::b2::error::ValidationErr;
use crate::b2::header_constants::B2_LIST_BUCKETS;
use crate::b2::response::ListBucketsResponse;
use crate::b2::types::{B2Api, B2Request, BucketType, ToB2Request};
use http::HeaderMap;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the `b2_list_buckets` operation.
///
/// Without filters every bucket of the account is returned. The server
/// decides the order; the client keeps it as-is.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)] // force required
    client: B2Client,

    #[builder(default)]
    extra_headers: HeaderMap,
    /// Only return the bucket with this id.
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    /// Only return the bucket with this name.
    #[builder(default, setter(into, strip_option))]
    bucket_name: Option<String>,
    /// Only return buckets of these types.
    #[builder(default, setter(strip_option))]
    bucket_types: Option<Vec<BucketType>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListBucketsBody<'a> {
    account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_types: Option<&'a [BucketType]>,
}

impl B2Api for ListBuckets {
    type B2Response = ListBucketsResponse;
}

/// Builder type for [`ListBuckets`] that is returned by [`B2Client::list_buckets`](crate::b2::B2Client::list_buckets).
pub type ListBucketsBldr = ListBucketsBuilder<((B2Client,), (), (), (), ())>;

impl ToB2Request for ListBuckets {
    fn to_b2request(self) -> Result<B2Request, ValidationErr> {
        let account_id = self.client.account_id();
        let body = serde_json::to_vec(&ListBucketsBody {
            account_id: &account_id,
            bucket_id: self.bucket_id.as_deref(),
            bucket_name: self.bucket_name.as_deref(),
            bucket_types: self.bucket_types.as_deref(),
        })?;

        Ok(B2Request::builder()
            .client(self.client)
            .operation(B2_LIST_BUCKETS)
            .body(body)
            .extra_headers(self.extra_headers)
            .build())
    }
}

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
use crate::b2::header_constants::B2_DELETE_BUCKET;
use crate::b2::response::DeleteBucketResponse;
use crate::b2::types::{B2Api, B2Request, ToB2Request};
use crate::b2::utils::check_bucket_id;
use http::HeaderMap;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the `b2_delete_bucket` operation.
///
/// The server refuses to delete a bucket that still holds file versions.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucket {
    #[builder(!default)] // force required
    client: B2Client,

    #[builder(default)]
    extra_headers: HeaderMap,
    #[builder(!default, setter(into))] // force required
    bucket_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteBucketBody<'a> {
    account_id: &'a str,
    bucket_id: &'a str,
}

impl B2Api for DeleteBucket {
    type B2Response = DeleteBucketResponse;
}

/// Builder type for [`DeleteBucket`] that is returned by [`B2Client::delete_bucket`](crate::b2::B2Client::delete_bucket).
pub type DeleteBucketBldr = DeleteBucketBuilder<((B2Client,), (), (String,))>;

impl ToB2Request for DeleteBucket {
    fn to_b2request(self) -> Result<B2Request, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;

        let account_id = self.client.account_id();
        let body = serde_json::to_vec(&DeleteBucketBody {
            account_id: &account_id,
            bucket_id: &self.bucket_id,
        })?;

        Ok(B2Request::builder()
            .client(self.client)
            .operation(B2_DELETE_BUCKET)
            .body(body)
            .extra_headers(self.extra_headers)
            .build())
    }
}

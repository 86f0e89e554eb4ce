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
use crate::b2::header_constants::B2_UPDATE_BUCKET;
use crate::b2::response::UpdateBucketResponse;
use crate::b2::types::{B2Api, B2Request, BucketInfo, BucketType, LifecycleRule, ToB2Request};
use http::HeaderMap;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the `b2_update_bucket` operation.
///
/// The target bucket comes from the client's [`B2Options`](crate::b2::options::B2Options)
/// when bucket persistence is on; `bucket_id` is then ignored. Otherwise
/// `bucket_id` must be set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateBucket {
    #[builder(!default)] // force required
    client: B2Client,

    #[builder(default)]
    extra_headers: HeaderMap,
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    #[builder(!default)] // force required
    bucket_type: BucketType,
    #[builder(default, setter(strip_option))]
    bucket_info: Option<BucketInfo>,
    #[builder(default, setter(strip_option))]
    lifecycle_rules: Option<Vec<LifecycleRule>>,
    /// Only apply the update if the bucket is still at this revision.
    #[builder(default, setter(strip_option))]
    if_revision_is: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBucketBody<'a> {
    account_id: &'a str,
    bucket_id: &'a str,
    bucket_type: &'a BucketType,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_info: Option<&'a BucketInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lifecycle_rules: Option<&'a [LifecycleRule]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    if_revision_is: Option<u64>,
}

impl B2Api for UpdateBucket {
    type B2Response = UpdateBucketResponse;
}

/// Builder type for [`UpdateBucket`] that is returned by [`B2Client::update_bucket`](crate::b2::B2Client::update_bucket).
pub type UpdateBucketBldr =
    UpdateBucketBuilder<((B2Client,), (), (), (BucketType,), (), (), ())>;

impl ToB2Request for UpdateBucket {
    fn to_b2request(self) -> Result<B2Request, ValidationErr> {
        let bucket_id = self.client.options().resolve_bucket_id(self.bucket_id)?;

        let account_id = self.client.account_id();
        let body = serde_json::to_vec(&UpdateBucketBody {
            account_id: &account_id,
            bucket_id: &bucket_id,
            bucket_type: &self.bucket_type,
            bucket_info: self.bucket_info.as_ref(),
            lifecycle_rules: self.lifecycle_rules.as_deref(),
            if_revision_is: self.if_revision_is,
        })?;

        Ok(B2Request::builder()
            .client(self.client)
            .operation(B2_UPDATE_BUCKET)
            .body(body)
            .extra_headers(self.extra_headers)
            .build())
    }
}

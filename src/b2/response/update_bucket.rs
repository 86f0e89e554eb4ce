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

use crate::b2::types::{B2Request, Bucket};
use crate::{impl_from_b2response_bucket, impl_has_b2fields};
use http::HeaderMap;

/// Response of
/// [update_bucket()](crate::b2::B2Client::update_bucket)
/// API
///
/// The bucket after the update, including its new revision.
#[derive(Clone, Debug)]
pub struct UpdateBucketResponse {
    request: B2Request,
    headers: HeaderMap,
    bucket: Bucket,
}

impl_has_b2fields!(UpdateBucketResponse);
impl_from_b2response_bucket!(UpdateBucketResponse);

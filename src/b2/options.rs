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

//! Per-client bucket defaults

use crate::b2::error::ValidationErr;

/// Bucket defaults owned by a client.
///
/// When `persist_bucket` is set, operations that take an optional bucket id
/// always act on `bucket_id`, and an explicitly passed id is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct B2Options {
    pub bucket_id: Option<String>,
    pub persist_bucket: bool,
}

impl B2Options {
    /// Options that persist the given bucket for every bucket-scoped call.
    pub fn persisted<S: Into<String>>(bucket_id: S) -> Self {
        Self {
            bucket_id: Some(bucket_id.into()),
            persist_bucket: true,
        }
    }

    /// Picks the bucket id an operation should act on.
    pub fn resolve_bucket_id(&self, explicit: Option<String>) -> Result<String, ValidationErr> {
        if self.persist_bucket {
            return self
                .bucket_id
                .clone()
                .filter(|v| !v.is_empty())
                .ok_or(ValidationErr::MissingPersistedBucketId);
        }

        explicit
            .filter(|v| !v.is_empty())
            .ok_or(ValidationErr::MissingBucketId)
    }
}

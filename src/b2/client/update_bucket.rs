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

use super::B2Client;
use crate::b2::builders::{UpdateBucket, UpdateBucketBldr};
use crate::b2::types::BucketType;

impl B2Client {
    /// Creates an [`UpdateBucket`] request builder.
    ///
    /// The bucket is chosen with `.bucket_id(..)`, unless the client persists a
    /// default bucket, in which case that bucket is always updated.
    ///
    /// To execute the request, call [`UpdateBucket::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing an [`UpdateBucketResponse`](crate::b2::response::UpdateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::B2Client;
    /// use backblaze::b2::response_traits::HasBucket;
    /// use backblaze::b2::types::{B2Api, BucketType};
    /// use tokio_util::sync::CancellationToken;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::from_env().unwrap();
    ///     let resp = client
    ///         .update_bucket(BucketType::AllPublic)
    ///         .bucket_id("4a48fe8875c6214145260818")
    ///         .build()
    ///         .send(&CancellationToken::new())
    ///         .await
    ///         .unwrap();
    ///     println!("bucket is now {}", resp.bucket().bucket_type);
    /// }
    /// ```
    pub fn update_bucket(&self, bucket_type: BucketType) -> UpdateBucketBldr {
        UpdateBucket::builder()
            .client(self.clone())
            .bucket_type(bucket_type)
    }
}

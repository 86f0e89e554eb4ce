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
use crate::b2::builders::{CreateBucket, CreateBucketBldr};
use crate::b2::types::BucketType;

impl B2Client {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::b2::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::B2Client;
    /// use backblaze::b2::response::CreateBucketResponse;
    /// use backblaze::b2::response_traits::HasBucket;
    /// use backblaze::b2::types::{B2Api, BucketType};
    /// use tokio_util::sync::CancellationToken;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::from_env().unwrap();
    ///     let resp: CreateBucketResponse = client
    ///         .create_bucket("photos", BucketType::AllPrivate)
    ///         .build()
    ///         .send(&CancellationToken::new())
    ///         .await
    ///         .unwrap();
    ///     println!("created bucket '{}'", resp.bucket().bucket_id);
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(
        &self,
        bucket_name: S,
        bucket_type: BucketType,
    ) -> CreateBucketBldr {
        CreateBucket::builder()
            .client(self.clone())
            .bucket_name(bucket_name)
            .bucket_type(bucket_type)
    }
}

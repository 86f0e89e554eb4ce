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
use crate::b2::builders::{ListBuckets, ListBucketsBldr};

impl B2Client {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::b2::types::B2Api::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::b2::response::ListBucketsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use backblaze::b2::B2Client;
    /// use backblaze::b2::response::ListBucketsResponse;
    /// use backblaze::b2::types::B2Api;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = B2Client::from_env().unwrap();
    ///     let resp: ListBucketsResponse = client
    ///         .list_buckets()
    ///         .build()
    ///         .send(&CancellationToken::new())
    ///         .await
    ///         .unwrap();
    ///     for bucket in resp.buckets() {
    ///         println!("{} {}", bucket.bucket_id, bucket.bucket_name);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }
}

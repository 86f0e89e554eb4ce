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

//! Responses for [B2Client](crate::b2::B2Client) API calls.

mod create_bucket;
mod delete_bucket;
mod list_buckets;
mod update_bucket;

pub use create_bucket::CreateBucketResponse;
pub use delete_bucket::DeleteBucketResponse;
pub use list_buckets::ListBucketsResponse;
pub use update_bucket::UpdateBucketResponse;

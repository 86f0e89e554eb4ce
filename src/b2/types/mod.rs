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

//! Core types shared by every B2 operation

pub mod b2_request;
pub mod bucket;
pub mod traits;

pub use b2_request::B2Request;
pub use bucket::{Bucket, BucketInfo, BucketType, LifecycleRule};
pub use traits::{B2Api, FromB2Response, ToB2Request};

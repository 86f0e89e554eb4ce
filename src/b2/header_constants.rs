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

pub use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};

pub const APPLICATION_JSON: &str = "application/json";

/// Path prefix shared by every native API operation.
pub const B2_API_PREFIX: &str = "/b2api/v2";

pub const B2_LIST_BUCKETS: &str = "b2_list_buckets";
pub const B2_CREATE_BUCKET: &str = "b2_create_bucket";
pub const B2_DELETE_BUCKET: &str = "b2_delete_bucket";
pub const B2_UPDATE_BUCKET: &str = "b2_update_bucket";

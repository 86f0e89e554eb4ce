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

use backblaze::b2::transport::HttpRequest;
use uuid::Uuid;

pub fn rand_bucket_name() -> String {
    format!("test-{}", Uuid::new_v4().simple())
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses the JSON body of a recorded request.
pub fn request_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(&request.body).unwrap()
}

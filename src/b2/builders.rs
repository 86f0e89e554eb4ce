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

//! Argument builders for [`B2Request`](crate::b2::types::B2Request).

mod create_bucket;
mod delete_bucket;
mod list_buckets;
mod update_bucket;

pub use create_bucket::*;
pub use delete_bucket::*;
pub use list_buckets::*;
pub use update_bucket::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::b2::client::B2Client;
    use crate::b2::creds::StaticProvider;
    use crate::b2::options::B2Options;

    pub fn client_with(options: B2Options) -> B2Client {
        B2Client::new(
            "https://api000.backblazeb2.com".parse().unwrap(),
            StaticProvider::new("acct1", "tok"),
            options,
        )
        .unwrap()
    }

    pub fn body_json(req: &crate::b2::types::B2Request) -> serde_json::Value {
        serde_json::from_slice(req.body()).unwrap()
    }
}

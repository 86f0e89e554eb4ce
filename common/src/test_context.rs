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

use crate::fake_server::FakeServer;
use crate::mock_transport::MockTransport;
use backblaze::b2::creds::StaticProvider;
use backblaze::b2::http::BaseUrl;
use backblaze::b2::options::B2Options;
use backblaze::b2::transport::Transport;
use backblaze::b2::{B2Client, B2ClientBuilder};
use std::sync::Arc;

pub const TEST_API_URL: &str = "https://api000.backblazeb2.com";
pub const TEST_ACCOUNT_ID: &str = "acct1";
pub const TEST_AUTH_TOKEN: &str = "tok";

/// A client wired to an in-process transport, plus a handle to that transport.
pub struct TestContext<T: Transport + 'static> {
    pub client: B2Client,
    pub transport: Arc<T>,
}

impl<T: Transport + 'static> TestContext<T> {
    pub fn with_transport(transport: Arc<T>, options: B2Options) -> Self {
        let base_url: BaseUrl = TEST_API_URL.parse().unwrap();
        let client = B2ClientBuilder::new(base_url)
            .provider(StaticProvider::new(TEST_ACCOUNT_ID, TEST_AUTH_TOKEN))
            .options(options)
            .transport(transport.clone())
            .build()
            .unwrap();
        Self { client, transport }
    }
}

impl TestContext<MockTransport> {
    pub fn mock() -> Self {
        Self::mock_with_options(B2Options::default())
    }

    pub fn mock_with_options(options: B2Options) -> Self {
        Self::with_transport(Arc::new(MockTransport::new()), options)
    }
}

impl TestContext<FakeServer> {
    pub fn fake() -> Self {
        Self::fake_with_options(B2Options::default())
    }

    pub fn fake_with_options(options: B2Options) -> Self {
        Self::with_transport(
            Arc::new(FakeServer::new(TEST_ACCOUNT_ID, TEST_AUTH_TOKEN)),
            options,
        )
    }
}

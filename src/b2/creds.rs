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

//! Credential providers

use std::fmt;

/// Account id and the authorization token issued for it.
#[derive(Clone)]
pub struct Credentials {
    pub account_id: String,
    pub authorization_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("authorization_token", &"*****")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given account id and authorization token
    ///
    /// # Examples
    ///
    /// ```
    /// use backblaze::b2::creds::StaticProvider;
    /// let provider = StaticProvider::new("acct1", "tok");
    /// ```
    pub fn new(account_id: &str, authorization_token: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                account_id: account_id.to_string(),
                authorization_token: authorization_token.to_string(),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

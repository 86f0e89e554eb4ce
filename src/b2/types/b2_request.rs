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

use crate::b2::client::B2Client;
use crate::b2::error::{Error, ValidationErr};
use crate::b2::header_constants::*;
use crate::b2::transport::{HttpRequest, HttpResponse};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method};
use tokio_util::sync::CancellationToken;
use typed_builder::TypedBuilder;

/// A generated B2 API call: target operation, JSON body and extra headers.
#[derive(Clone, Debug, TypedBuilder)]
pub struct B2Request {
    #[builder(!default)] // force required
    pub(crate) client: B2Client,

    /// Operation name, e.g. `b2_create_bucket`
    #[builder(!default)] // force required
    pub(crate) operation: &'static str,

    #[builder(default, setter(into))]
    pub(crate) body: Bytes,

    #[builder(default)]
    pub(crate) extra_headers: HeaderMap,
}

impl B2Request {
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Renders the HTTP request descriptor for this call.
    ///
    /// Every native API call is a `POST` of a JSON document, authorized with
    /// the account's token.
    pub fn to_http_request(&self) -> Result<HttpRequest, ValidationErr> {
        let shared = &self.client.shared;
        let creds = shared.provider.fetch();

        let mut auth = HeaderValue::from_str(&creds.authorization_token)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));
        headers.insert(USER_AGENT, HeaderValue::from_str(&shared.user_agent)?);
        for (key, value) in self.extra_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }

        Ok(HttpRequest {
            method: Method::POST,
            url: shared.base_url.build_url(self.operation),
            headers,
            body: self.body.clone(),
        })
    }

    /// Execute the request, returning the checked response. Only used in [`B2Api::send()`](crate::b2::types::B2Api::send)
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<HttpResponse, Error> {
        let http_request = self.to_http_request()?;
        self.client.execute(self.operation, http_request, cancel).await
    }
}

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

use super::b2_request::B2Request;
use crate::b2::error::{Error, ValidationErr};
use crate::b2::transport::HttpResponse;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub trait ToB2Request: Sized {
    /// Consumes this request builder and returns a [`B2Request`].
    ///
    /// This is pure request generation: arguments are validated, the JSON body
    /// is serialized and the target operation is chosen. No network I/O
    /// happens here, so a validation failure guarantees nothing was sent.
    fn to_b2request(self) -> Result<B2Request, ValidationErr>;
}

pub trait FromB2Response: Sized {
    /// Converts the outcome of executing `request` into a typed response.
    ///
    /// `response` has already passed the error check, so an `Ok` value always
    /// carries a success status; decoding failures surface as
    /// [`Error::Decode`].
    fn from_b2response(
        request: B2Request,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error>;
}

#[async_trait]
pub trait B2Api: ToB2Request {
    /// The response type associated with this request builder.
    type B2Response: FromB2Response;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// Steps: generate the request, send it over the client's transport while
    /// watching `cancel`, check the response for API errors, decode the body.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`] - arguments were rejected before sending
    /// * [`Error::Transport`] - the round trip failed
    /// * [`Error::Api`] - the server answered with a non-success status
    /// * [`Error::Decode`] - the body did not have the expected shape
    /// * [`Error::Cancelled`] - `cancel` fired before the response arrived
    async fn send(self, cancel: &CancellationToken) -> Result<Self::B2Response, Error> {
        let req: B2Request = self.to_b2request()?;
        let resp: Result<HttpResponse, Error> = req.execute(cancel).await;
        Self::B2Response::from_b2response(req, resp)
    }
}

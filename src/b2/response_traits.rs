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

//! Trait composition for B2 responses

use crate::b2::types::{B2Request, Bucket};
use http::HeaderMap;

#[macro_export]
/// Implements the `HasB2Fields` trait for the specified types.
macro_rules! impl_has_b2fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::b2::response_traits::HasB2Fields for $ty {
                /// The request that was sent to the B2 API.
                #[inline]
                fn request(&self) -> &$crate::b2::types::B2Request {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }
            }
        )*
    };
}

#[macro_export]
/// Implements `FromB2Response` and `HasBucket` for responses whose body is a
/// single bucket document.
macro_rules! impl_from_b2response_bucket {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::b2::types::FromB2Response for $ty {
                fn from_b2response(
                    request: $crate::b2::types::B2Request,
                    response: Result<$crate::b2::transport::HttpResponse, $crate::b2::error::Error>,
                ) -> Result<Self, $crate::b2::error::Error> {
                    let resp = response?;
                    let bucket = $crate::b2::utils::decode_json(&resp.body)?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        bucket,
                    })
                }
            }

            impl $crate::b2::response_traits::HasBucket for $ty {
                #[inline]
                fn bucket(&self) -> &$crate::b2::types::Bucket {
                    &self.bucket
                }

                #[inline]
                fn into_bucket(self) -> $crate::b2::types::Bucket {
                    self.bucket
                }
            }
        )*
    };
}

/// Access to the request and response headers of a completed call.
pub trait HasB2Fields {
    /// The request that was sent to the B2 API.
    fn request(&self) -> &B2Request;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
}

/// Returns the bucket the server reported back.
pub trait HasBucket {
    fn bucket(&self) -> &Bucket;

    fn into_bucket(self) -> Bucket
    where
        Self: Sized;
}

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

//! # Backblaze B2 Rust Client (`backblaze`)
//!
//! This crate provides a strongly-typed, async interface to the bucket management
//! endpoints of the B2 cloud storage native API.
//!
//! Each supported operation has a corresponding request builder (e.g. [`b2::builders::CreateBucket`],
//! [`b2::builders::ListBuckets`]), configured through a fluent builder pattern.
//!
//! All request builders implement the [`b2::types::B2Api`] trait, which provides the async
//! [`send`](crate::b2::types::B2Api::send) method. Every call takes a
//! [`CancellationToken`](tokio_util::sync::CancellationToken); cancelling it aborts the
//! in-flight request with [`Error::Cancelled`](crate::b2::error::Error::Cancelled).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use backblaze::b2::B2Client;
//! use backblaze::b2::creds::StaticProvider;
//! use backblaze::b2::http::BaseUrl;
//! use backblaze::b2::response_traits::HasBucket;
//! use backblaze::b2::types::{B2Api, BucketType};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://api000.backblazeb2.com".parse().unwrap();
//!     let client = B2Client::new(base_url, StaticProvider::new("account-id", "auth-token"), Default::default())
//!         .unwrap();
//!
//!     let cancel = CancellationToken::new();
//!     let resp = client
//!         .create_bucket("photos", BucketType::AllPrivate)
//!         .build()
//!         .send(&cancel)
//!         .await
//!         .expect("request failed");
//!
//!     println!("created bucket {}", resp.bucket().bucket_id);
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`b2::client::B2Client`] returns a builder struct
//! - Builders implement [`b2::types::ToB2Request`] for request generation and [`b2::types::B2Api`] for execution
//! - Responses implement [`b2::types::FromB2Response`]; API errors are detected before any decoding

#![allow(clippy::result_large_err)]
pub mod b2;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

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

use crate::b2::types::{B2Request, Bucket};
use crate::{impl_from_b2response_bucket, impl_has_b2fields};
use http::HeaderMap;

/// Response of
/// [create_bucket()](crate::b2::B2Client::create_bucket)
/// API
///
/// The bucket as created, with its server-assigned id.
#[derive(Clone, Debug)]
pub struct CreateBucketResponse {
    request: B2Request,
    headers: HeaderMap,
    bucket: Bucket,
}

impl_has_b2fields!(CreateBucketResponse);
impl_from_b2response_bucket!(CreateBucketResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b2::builders::test_support::client_with;
    use crate::b2::error::Error;
    use crate::b2::response_traits::{HasB2Fields, HasBucket};
    use crate::b2::transport::HttpResponse;
    use crate::b2::types::{BucketType, FromB2Response, ToB2Request};
    use bytes::Bytes;
    use http::StatusCode;

    fn request() -> B2Request {
        client_with(Default::default())
            .create_bucket("photos", BucketType::AllPrivate)
            .build()
            .to_b2request()
            .unwrap()
    }

    #[test]
    fn test_decode_created_bucket() {
        let resp = HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(
                br#"{"accountId":"acct1","bucketId":"b1","bucketName":"photos","bucketType":"allPrivate"}"#,
            ),
        };
        let created = CreateBucketResponse::from_b2response(request(), Ok(resp)).unwrap();

        assert_eq!(created.request().operation(), "b2_create_bucket");
        assert_eq!(created.bucket().bucket_id, "b1");
        let bucket = created.into_bucket();
        assert_eq!(bucket.bucket_name, "photos");
        assert_eq!(bucket.bucket_type, BucketType::AllPrivate);
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let resp = HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(br#"{"unexpected":true}"#),
        };
        let r = CreateBucketResponse::from_b2response(request(), Ok(resp));
        assert!(matches!(r, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_error_passes_through() {
        let r = CreateBucketResponse::from_b2response(request(), Err(Error::Cancelled));
        assert!(matches!(r, Err(Error::Cancelled)));
    }
}

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
use crate::b2::error::ValidationErr;
use crate::b2::header_constants::B2_CREATE_BUCKET;
use crate::b2::response::CreateBucketResponse;
use crate::b2::types::{B2Api, B2Request, BucketInfo, BucketType, LifecycleRule, ToB2Request};
use crate::b2::utils::check_bucket_name;
use http::HeaderMap;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for the `b2_create_bucket` operation.
///
/// This struct constructs the parameters required for the [`B2Client::create_bucket`](crate::b2::B2Client::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: B2Client,

    #[builder(default)]
    extra_headers: HeaderMap,
    #[builder(!default, setter(into))] // force required
    bucket_name: String,
    #[builder(!default)] // force required
    bucket_type: BucketType,
    #[builder(default, setter(strip_option))]
    bucket_info: Option<BucketInfo>,
    #[builder(default, setter(strip_option))]
    lifecycle_rules: Option<Vec<LifecycleRule>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBucketBody<'a> {
    account_id: &'a str,
    bucket_name: &'a str,
    bucket_type: &'a BucketType,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket_info: Option<&'a BucketInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lifecycle_rules: Option<&'a [LifecycleRule]>,
}

impl B2Api for CreateBucket {
    type B2Response = CreateBucketResponse;
}

/// Builder type for [`CreateBucket`] that is returned by [`B2Client::create_bucket`](crate::b2::B2Client::create_bucket).
pub type CreateBucketBldr =
    CreateBucketBuilder<((B2Client,), (), (String,), (BucketType,), (), ())>;

impl ToB2Request for CreateBucket {
    fn to_b2request(self) -> Result<B2Request, ValidationErr> {
        check_bucket_name(&self.bucket_name)?;

        let account_id = self.client.account_id();
        let body = serde_json::to_vec(&CreateBucketBody {
            account_id: &account_id,
            bucket_name: &self.bucket_name,
            bucket_type: &self.bucket_type,
            bucket_info: self.bucket_info.as_ref(),
            lifecycle_rules: self.lifecycle_rules.as_deref(),
        })?;

        Ok(B2Request::builder()
            .client(self.client)
            .operation(B2_CREATE_BUCKET)
            .body(body)
            .extra_headers(self.extra_headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b2::builders::test_support::{body_json, client_with};
    use crate::b2::header_constants::{AUTHORIZATION, CONTENT_TYPE};
    use http::Method;
    use serde_json::json;

    #[test]
    fn test_create_photos_private() {
        let client = client_with(Default::default());
        let req = client
            .create_bucket("photos", BucketType::AllPrivate)
            .build()
            .to_b2request()
            .unwrap();

        assert_eq!(
            body_json(&req),
            json!({
                "accountId": "acct1",
                "bucketName": "photos",
                "bucketType": "allPrivate"
            })
        );

        let http = req.to_http_request().unwrap();
        assert_eq!(http.method, Method::POST);
        assert_eq!(
            http.url,
            "https://api000.backblazeb2.com/b2api/v2/b2_create_bucket"
        );
        assert_eq!(http.headers.get(AUTHORIZATION).unwrap(), "tok");
        assert_eq!(http.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_create_with_info_and_rules() {
        let client = client_with(Default::default());
        let info = BucketInfo::from([("owner".to_string(), "ops".to_string())]);
        let rule = LifecycleRule {
            file_name_prefix: "logs/".into(),
            days_from_uploading_to_hiding: Some(30),
            days_from_hiding_to_deleting: None,
        };
        let req = client
            .create_bucket("logs", BucketType::AllPublic)
            .bucket_info(info)
            .lifecycle_rules(vec![rule])
            .build()
            .to_b2request()
            .unwrap();

        let body = body_json(&req);
        assert_eq!(body["bucketInfo"], json!({"owner": "ops"}));
        assert_eq!(body["lifecycleRules"][0]["fileNamePrefix"], "logs/");
        assert_eq!(body["lifecycleRules"][0]["daysFromUploadingToHiding"], 30);
        assert_eq!(body["lifecycleRules"][0]["daysFromHidingToDeleting"], json!(null));
    }

    #[test]
    fn test_create_empty_name_rejected() {
        let client = client_with(Default::default());
        let r = client
            .create_bucket("", BucketType::AllPrivate)
            .build()
            .to_b2request();
        assert!(matches!(r, Err(ValidationErr::EmptyBucketName)));
    }

    quickcheck! {
        fn prop_non_empty_name_lands_in_body(name: String) -> quickcheck::TestResult {
            if name.is_empty() {
                return quickcheck::TestResult::discard();
            }
            let client = client_with(Default::default());
            let req = client
                .create_bucket(name.clone(), BucketType::AllPrivate)
                .build()
                .to_b2request()
                .unwrap();
            quickcheck::TestResult::from_bool(body_json(&req)["bucketName"] == name.as_str())
        }
    }
}

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

use backblaze::b2::header_constants::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use backblaze::b2::response::CreateBucketResponse;
use backblaze::b2::response_traits::{HasB2Fields, HasBucket};
use backblaze::b2::types::{B2Api, BucketInfo, BucketType, LifecycleRule};
use backblaze_common::mock_transport::MockReply;
use backblaze_common::test_context::TestContext;
use backblaze_common::utils::{init_logger, rand_bucket_name, request_json};
use http::Method;
use serde_json::json;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn create_bucket_photos_private() {
    init_logger();
    let ctx = TestContext::mock();
    ctx.transport.push(MockReply::json(
        200,
        json!({
            "accountId": "acct1",
            "bucketId": "b1",
            "bucketName": "photos",
            "bucketType": "allPrivate"
        }),
    ));

    let resp: CreateBucketResponse = ctx
        .client
        .create_bucket("photos", BucketType::AllPrivate)
        .build()
        .send(&CancellationToken::new())
        .await
        .unwrap();

    let bucket = resp.bucket();
    assert_eq!(bucket.bucket_id, "b1");
    assert_eq!(bucket.bucket_name, "photos");
    assert_eq!(bucket.bucket_type, BucketType::AllPrivate);
    assert_eq!(bucket.account_id, "acct1");
    assert_eq!(resp.request().operation(), "b2_create_bucket");

    let sent = ctx.transport.last_request().unwrap();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(
        sent.url,
        "https://api000.backblazeb2.com/b2api/v2/b2_create_bucket"
    );
    assert_eq!(sent.headers.get(AUTHORIZATION).unwrap(), "tok");
    assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(sent.headers.contains_key(USER_AGENT));
    assert_eq!(
        request_json(&sent),
        json!({"accountId": "acct1", "bucketName": "photos", "bucketType": "allPrivate"})
    );
}

#[tokio::test]
async fn create_bucket_empty_name_never_sends() {
    let ctx = TestContext::mock();

    let err = ctx
        .client
        .create_bucket("", BucketType::AllPublic)
        .build()
        .send(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            backblaze::b2::error::Error::Validation(
                backblaze::b2::error::ValidationErr::EmptyBucketName
            )
        ),
        "{err:?}"
    );
    assert_eq!(ctx.transport.call_count(), 0);
}

#[tokio::test]
async fn create_bucket_with_info_and_rules() {
    let ctx = TestContext::fake();
    let name = rand_bucket_name();
    let info = BucketInfo::from([("owner".to_string(), "ops".to_string())]);
    let rule = LifecycleRule {
        file_name_prefix: "tmp/".into(),
        days_from_uploading_to_hiding: None,
        days_from_hiding_to_deleting: Some(1),
    };

    let bucket = ctx
        .client
        .create_bucket(&name, BucketType::Snapshot)
        .bucket_info(info.clone())
        .lifecycle_rules(vec![rule.clone()])
        .build()
        .send(&CancellationToken::new())
        .await
        .unwrap()
        .into_bucket();

    assert_eq!(bucket.bucket_name, name);
    assert_eq!(bucket.bucket_type, BucketType::Snapshot);
    assert_eq!(bucket.bucket_info, info);
    assert_eq!(bucket.lifecycle_rules, vec![rule]);
    assert_eq!(bucket.revision, Some(1));
}

#[tokio::test]
async fn create_bucket_duplicate_name_is_api_error() {
    let ctx = TestContext::fake();
    let name = rand_bucket_name();
    let cancel = CancellationToken::new();

    ctx.client
        .create_bucket(&name, BucketType::AllPrivate)
        .build()
        .send(&cancel)
        .await
        .unwrap();

    let err = ctx
        .client
        .create_bucket(&name, BucketType::AllPrivate)
        .build()
        .send(&cancel)
        .await
        .unwrap_err();

    let api = err.api_error().expect("api error");
    assert_eq!(api.status(), 400);
    assert_eq!(api.code().as_str(), "duplicate_bucket_name");
    assert_eq!(ctx.transport.bucket_count(), 1);
}

#[tokio::test]
async fn sent_request_debug_masks_token() {
    let ctx = TestContext::mock();
    ctx.transport.push(MockReply::json(
        200,
        json!({"bucketId": "b1", "bucketName": "photos", "bucketType": "allPrivate"}),
    ));

    ctx.client
        .create_bucket("photos", BucketType::AllPrivate)
        .build()
        .send(&CancellationToken::new())
        .await
        .unwrap();

    let sent = ctx.transport.last_request().unwrap();
    assert_eq!(sent.headers.get(AUTHORIZATION).unwrap(), "tok");
    let printed = format!("{sent:?}");
    assert!(!printed.contains("\"tok\""), "{printed}");
}

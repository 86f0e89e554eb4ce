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

//! In-memory stand-in for the bucket endpoints of the native API.

use async_trait::async_trait;
use backblaze::b2::error::NetworkError;
use backblaze::b2::header_constants::*;
use backblaze::b2::transport::{HttpRequest, HttpResponse, Transport};
use backblaze::b2::types::{Bucket, BucketInfo, BucketType, LifecycleRule};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use serde_json::{Value, json};
use std::sync::Mutex;
use uuid::Uuid;

/// Serves `b2_list_buckets`, `b2_create_bucket`, `b2_delete_bucket` and
/// `b2_update_bucket` from a bucket table kept in memory.
#[derive(Debug)]
pub struct FakeServer {
    account_id: String,
    auth_token: String,
    buckets: Mutex<Vec<Bucket>>,
}

type Reply = (StatusCode, Value);

fn error(status: StatusCode, code: &str, message: &str) -> Reply {
    (
        status,
        json!({"status": status.as_u16(), "code": code, "message": message}),
    )
}

fn field<T: serde::de::DeserializeOwned>(body: &Value, name: &str) -> Option<T> {
    body.get(name)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

impl FakeServer {
    pub fn new(account_id: &str, auth_token: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            auth_token: auth_token.to_string(),
            buckets: Mutex::new(Vec::new()),
        }
    }

    /// Number of buckets currently stored.
    pub fn bucket_count(&self) -> usize {
        self.buckets.lock().unwrap().len()
    }

    fn handle(&self, request: &HttpRequest) -> Reply {
        let token = request
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if token != Some(self.auth_token.as_str()) {
            return error(StatusCode::UNAUTHORIZED, "bad_auth_token", "Invalid authorization token");
        }

        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(v) => v,
            Err(e) => return error(StatusCode::BAD_REQUEST, "bad_request", &e.to_string()),
        };
        if field::<String>(&body, "accountId").as_deref() != Some(self.account_id.as_str()) {
            return error(StatusCode::UNAUTHORIZED, "unauthorized", "account mismatch");
        }

        let operation = request.url.rsplit('/').next().unwrap_or_default();
        match operation {
            B2_LIST_BUCKETS => self.list(&body),
            B2_CREATE_BUCKET => self.create(&body),
            B2_DELETE_BUCKET => self.delete(&body),
            B2_UPDATE_BUCKET => self.update(&body),
            _ => error(StatusCode::NOT_FOUND, "not_found", "unknown operation"),
        }
    }

    fn list(&self, body: &Value) -> Reply {
        let bucket_id: Option<String> = field(body, "bucketId");
        let bucket_name: Option<String> = field(body, "bucketName");
        let bucket_types: Option<Vec<BucketType>> = field(body, "bucketTypes");

        let buckets: Vec<Bucket> = self
            .buckets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| bucket_id.as_ref().is_none_or(|id| &b.bucket_id == id))
            .filter(|b| bucket_name.as_ref().is_none_or(|n| &b.bucket_name == n))
            .filter(|b| {
                bucket_types
                    .as_ref()
                    .is_none_or(|types| types.contains(&b.bucket_type))
            })
            .cloned()
            .collect();

        (StatusCode::OK, json!({ "buckets": buckets }))
    }

    fn create(&self, body: &Value) -> Reply {
        let Some(bucket_name) = field::<String>(body, "bucketName") else {
            return error(StatusCode::BAD_REQUEST, "bad_request", "bucketName is required");
        };
        let Some(bucket_type) = field::<BucketType>(body, "bucketType") else {
            return error(StatusCode::BAD_REQUEST, "bad_request", "bucketType is required");
        };

        let mut buckets = self.buckets.lock().unwrap();
        if buckets.iter().any(|b| b.bucket_name == bucket_name) {
            return error(
                StatusCode::BAD_REQUEST,
                "duplicate_bucket_name",
                "Bucket name is already in use.",
            );
        }

        let bucket = Bucket {
            account_id: self.account_id.clone(),
            bucket_id: Uuid::new_v4().simple().to_string(),
            bucket_name,
            bucket_type,
            bucket_info: field::<BucketInfo>(body, "bucketInfo").unwrap_or_default(),
            lifecycle_rules: field::<Vec<LifecycleRule>>(body, "lifecycleRules")
                .unwrap_or_default(),
            revision: Some(1),
        };
        buckets.push(bucket.clone());
        (StatusCode::OK, json!(bucket))
    }

    fn delete(&self, body: &Value) -> Reply {
        let bucket_id: Option<String> = field(body, "bucketId");
        let mut buckets = self.buckets.lock().unwrap();
        match buckets
            .iter()
            .position(|b| Some(&b.bucket_id) == bucket_id.as_ref())
        {
            Some(idx) => (StatusCode::OK, json!(buckets.remove(idx))),
            None => error(StatusCode::BAD_REQUEST, "bad_bucket_id", "Invalid bucketId"),
        }
    }

    fn update(&self, body: &Value) -> Reply {
        let bucket_id: Option<String> = field(body, "bucketId");
        let mut buckets = self.buckets.lock().unwrap();
        let Some(bucket) = buckets
            .iter_mut()
            .find(|b| Some(&b.bucket_id) == bucket_id.as_ref())
        else {
            return error(StatusCode::BAD_REQUEST, "bad_bucket_id", "Invalid bucketId");
        };

        if let Some(expected) = field::<u64>(body, "ifRevisionIs") {
            if bucket.revision != Some(expected) {
                return error(StatusCode::CONFLICT, "conflict", "ifRevisionIs does not match");
            }
        }

        if let Some(bucket_type) = field::<BucketType>(body, "bucketType") {
            bucket.bucket_type = bucket_type;
        }
        if let Some(info) = field::<BucketInfo>(body, "bucketInfo") {
            bucket.bucket_info = info;
        }
        if let Some(rules) = field::<Vec<LifecycleRule>>(body, "lifecycleRules") {
            bucket.lifecycle_rules = rules;
        }
        bucket.revision = Some(bucket.revision.unwrap_or(0) + 1);
        (StatusCode::OK, json!(bucket))
    }
}

#[async_trait]
impl Transport for FakeServer {
    fn name(&self) -> &'static str {
        "fake-server"
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let (status, body) = self.handle(&request);
        log::debug!("fake server: {} -> {status}", request.url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        })
    }
}

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

//! Bucket data model shared by all bucket operations
//!
//! Wire representation is JSON with camelCase keys:
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `accountId` | `string` | Account owning the bucket |
//! | `bucketId` | `string` | Provider-assigned, immutable identifier |
//! | `bucketName` | `string` | Name, unique within the account |
//! | `bucketType` | `string` | `allPrivate`, `allPublic` or `snapshot` |
//! | `bucketInfo` | `object` | User-defined string key/value pairs |
//! | `lifecycleRules` | `array` | Hide/delete rules by file name prefix |
//! | `revision` | `integer` | Incremented on every update |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// User-defined key/value metadata attached to a bucket.
pub type BucketInfo = HashMap<String, String>;

/// Access type of a bucket.
///
/// Values the client does not know are kept verbatim in [`BucketType::Other`]
/// so that a bucket listing never fails on a newly introduced type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BucketType {
    #[default]
    AllPrivate,
    AllPublic,
    Snapshot,
    Other(String),
}

impl BucketType {
    pub fn as_str(&self) -> &str {
        match self {
            BucketType::AllPrivate => "allPrivate",
            BucketType::AllPublic => "allPublic",
            BucketType::Snapshot => "snapshot",
            BucketType::Other(s) => s,
        }
    }
}

impl From<String> for BucketType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "allPrivate" => BucketType::AllPrivate,
            "allPublic" => BucketType::AllPublic,
            "snapshot" => BucketType::Snapshot,
            _ => BucketType::Other(s),
        }
    }
}

impl From<&str> for BucketType {
    fn from(s: &str) -> Self {
        BucketType::from(s.to_string())
    }
}

impl From<BucketType> for String {
    fn from(t: BucketType) -> Self {
        match t {
            BucketType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule hiding and then deleting files whose names start with a prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRule {
    pub file_name_prefix: String,
    #[serde(default)]
    pub days_from_uploading_to_hiding: Option<u64>,
    #[serde(default)]
    pub days_from_hiding_to_deleting: Option<u64>,
}

/// A bucket as reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    #[serde(default)]
    pub account_id: String,
    pub bucket_id: String,
    pub bucket_name: String,
    pub bucket_type: BucketType,
    #[serde(default)]
    pub bucket_info: BucketInfo,
    #[serde(default)]
    pub lifecycle_rules: Vec<LifecycleRule>,
    #[serde(default)]
    pub revision: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bucket_type_wire_names() {
        for (t, s) in [
            (BucketType::AllPrivate, "allPrivate"),
            (BucketType::AllPublic, "allPublic"),
            (BucketType::Snapshot, "snapshot"),
        ] {
            assert_eq!(serde_json::to_value(&t).unwrap(), json!(s));
            assert_eq!(BucketType::from(s), t);
        }
    }

    #[test]
    fn test_unknown_bucket_type_preserved() {
        let t: BucketType = serde_json::from_value(json!("restricted")).unwrap();
        assert_eq!(t, BucketType::Other("restricted".into()));
        assert_eq!(t.to_string(), "restricted");
    }

    #[test]
    fn test_decode_full_bucket() {
        let bucket: Bucket = serde_json::from_value(json!({
            "accountId": "acct1",
            "bucketId": "b1",
            "bucketName": "photos",
            "bucketType": "allPrivate",
            "bucketInfo": {"owner": "ops"},
            "lifecycleRules": [{
                "fileNamePrefix": "logs/",
                "daysFromUploadingToHiding": 7,
                "daysFromHidingToDeleting": 1
            }],
            "revision": 3,
            "options": ["s3"]
        }))
        .unwrap();

        assert_eq!(bucket.account_id, "acct1");
        assert_eq!(bucket.bucket_id, "b1");
        assert_eq!(bucket.bucket_name, "photos");
        assert_eq!(bucket.bucket_type, BucketType::AllPrivate);
        assert_eq!(bucket.bucket_info.get("owner").map(String::as_str), Some("ops"));
        assert_eq!(bucket.lifecycle_rules[0].days_from_uploading_to_hiding, Some(7));
        assert_eq!(bucket.revision, Some(3));
    }

    #[test]
    fn test_decode_minimal_bucket() {
        let bucket: Bucket = serde_json::from_value(json!({
            "bucketId": "b1",
            "bucketName": "photos",
            "bucketType": "allPublic"
        }))
        .unwrap();
        assert!(bucket.account_id.is_empty());
        assert!(bucket.bucket_info.is_empty());
        assert!(bucket.lifecycle_rules.is_empty());
        assert_eq!(bucket.revision, None);
    }

    #[test]
    fn test_decode_missing_id_fails() {
        let r = serde_json::from_value::<Bucket>(json!({
            "bucketName": "photos",
            "bucketType": "allPublic"
        }));
        assert!(r.is_err());
    }
}

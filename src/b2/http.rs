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

use crate::b2::error::ValidationErr;
use crate::b2::header_constants::B2_API_PREFIX;
use std::fmt;
use std::str::FromStr;

/// API endpoint of an authorized account, e.g. `https://api000.backblazeb2.com`.
///
/// Only scheme, host and port are kept; operation paths are appended by
/// [`BaseUrl::build_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    pub port: u16,
}

impl BaseUrl {
    /// Returns the URL of the given API operation.
    pub fn build_url(&self, operation: &str) -> String {
        format!("{self}{B2_API_PREFIX}/{operation}")
    }

    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_header_value())
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Parses a base URL; the scheme defaults to https when omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationErr::InvalidBaseUrl {
            url: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty URL"));
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        let url = url::Url::parse(&with_scheme).map_err(|e| invalid(&e.to_string()))?;

        let https = match url.scheme() {
            "https" => true,
            "http" => false,
            other => return Err(invalid(&format!("unsupported scheme '{other}'"))),
        };

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("missing host"))?
            .to_string();

        if !url.query().unwrap_or_default().is_empty() {
            return Err(invalid("query parameters are not allowed"));
        }

        Ok(BaseUrl {
            https,
            host,
            port: url.port().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_https() {
        let base_url: BaseUrl = "https://api000.backblazeb2.com".parse().unwrap();
        assert!(base_url.https);
        assert_eq!(base_url.host, "api000.backblazeb2.com");
        assert_eq!(base_url.port, 0);
        assert_eq!(
            base_url.build_url("b2_list_buckets"),
            "https://api000.backblazeb2.com/b2api/v2/b2_list_buckets"
        );
    }

    #[test]
    fn test_base_url_without_scheme_defaults_to_https() {
        let base_url: BaseUrl = "api001.backblazeb2.com".parse().unwrap();
        assert!(base_url.https);
        assert_eq!(base_url.to_string(), "https://api001.backblazeb2.com");
    }

    #[test]
    fn test_base_url_http_with_port() {
        let base_url: BaseUrl = "http://localhost:8180/".parse().unwrap();
        assert!(!base_url.https);
        assert_eq!(base_url.port, 8180);
        assert_eq!(base_url.host_header_value(), "localhost:8180");
        assert_eq!(
            base_url.build_url("b2_create_bucket"),
            "http://localhost:8180/b2api/v2/b2_create_bucket"
        );
    }

    #[test]
    fn test_base_url_path_is_dropped() {
        let base_url: BaseUrl = "https://api000.backblazeb2.com/b2api/v2".parse().unwrap();
        assert_eq!(
            base_url.build_url("b2_delete_bucket"),
            "https://api000.backblazeb2.com/b2api/v2/b2_delete_bucket"
        );
    }

    #[test]
    fn test_base_url_invalid() {
        assert!("".parse::<BaseUrl>().is_err());
        assert!("ftp://example.com".parse::<BaseUrl>().is_err());
        assert!("https://example.com/?a=b".parse::<BaseUrl>().is_err());
        assert!("https://".parse::<BaseUrl>().is_err());
    }
}

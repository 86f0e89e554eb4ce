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

//! B2 client to perform bucket operations
//!
//! # HTTP version
//!
//! With the `http2` feature (on by default) the reqwest transport negotiates
//! HTTP/2 through ALPN and falls back to HTTP/1.1 otherwise.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::b2::b2_error_response::check_response;
use crate::b2::creds::{Provider, StaticProvider};
use crate::b2::error::{Error, ValidationErr};
use crate::b2::http::BaseUrl;
use crate::b2::options::B2Options;
use crate::b2::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

mod create_bucket;
mod delete_bucket;
mod list_buckets;
mod update_bucket;

pub const ENV_API_URL: &str = "B2_API_URL";
pub const ENV_ACCOUNT_ID: &str = "B2_ACCOUNT_ID";
pub const ENV_AUTH_TOKEN: &str = "B2_AUTH_TOKEN";
pub const ENV_BUCKET_ID: &str = "B2_BUCKET_ID";
pub const ENV_PERSIST_BUCKET: &str = "B2_PERSIST_BUCKET";

/// Settings of the HTTP connection pool used by the default transport.
///
/// # Example
///
/// ```
/// use backblaze::b2::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Idle connections kept per host. Default: 8
    pub max_idle_per_host: usize,
    /// Lifetime of an idle pooled connection. Default: 90 seconds
    pub idle_timeout: Duration,
    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 8,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }
}

/// Manufactures a [`B2Client`] from an API URL, credentials and options.
#[derive(Debug)]
pub struct B2ClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    options: B2Options,
    /// Replaces the reqwest transport; pool and timeout settings are then unused.
    transport: Option<Arc<dyn Transport>>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
    timeout: Option<Duration>,
    no_proxy: bool,
}

impl B2ClientBuilder {
    /// Creates a builder for the API URL returned by account authorization.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            options: B2Options::default(),
            transport: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
            timeout: None,
            no_proxy: false,
        }
    }

    /// Reads client settings through `lookup`, usually the process environment.
    ///
    /// `B2_API_URL`, `B2_ACCOUNT_ID` and `B2_AUTH_TOKEN` are required;
    /// `B2_BUCKET_ID` and `B2_PERSIST_BUCKET` (`true`/`false`/`1`/`0`) are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ValidationErr::MissingEnvVar(name))
        };

        let api_url = required(ENV_API_URL)?;
        let account_id = required(ENV_ACCOUNT_ID)?;
        let auth_token = required(ENV_AUTH_TOKEN)?;
        let bucket_id = lookup(ENV_BUCKET_ID).filter(|v| !v.is_empty());
        let persist_bucket = match lookup(ENV_PERSIST_BUCKET) {
            None => false,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "" | "0" | "false" => false,
                "1" | "true" => true,
                _ => {
                    return Err(ValidationErr::InvalidEnvVar {
                        name: ENV_PERSIST_BUCKET,
                        value: v,
                    });
                }
            },
        };

        log::debug!("{ENV_API_URL}={api_url}");
        log::debug!("{ENV_ACCOUNT_ID}={account_id}");
        log::debug!("{ENV_AUTH_TOKEN}=*****");
        log::debug!("{ENV_BUCKET_ID}={bucket_id:?}");
        log::debug!("{ENV_PERSIST_BUCKET}={persist_bucket}");

        Ok(Self::new(api_url.parse()?)
            .provider(StaticProvider::new(&account_id, &auth_token))
            .options(B2Options {
                bucket_id,
                persist_bucket,
            }))
    }

    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub fn options(mut self, options: B2Options) -> Self {
        self.options = options;
        self
    }

    /// Use `transport` instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Whole-request timeout of the reqwest transport. Elapsing surfaces as
    /// [`Error::Transport`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ignore system proxy settings (`HTTPS_PROXY` and friends) in the reqwest
    /// transport.
    pub fn no_proxy(mut self, no_proxy: bool) -> Self {
        self.no_proxy = no_proxy;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<B2Client, Error> {
        let provider = self.provider.ok_or(ValidationErr::MissingCredentials)?;

        let mut user_agent = String::from("backblaze-rs/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";
        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let pool_config = &self.connection_pool_config;
                let mut builder = reqwest::Client::builder()
                    .tcp_keepalive(pool_config.tcp_keepalive)
                    .pool_max_idle_per_host(pool_config.max_idle_per_host)
                    .pool_idle_timeout(pool_config.idle_timeout);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if self.no_proxy {
                    builder = builder.no_proxy();
                }
                #[cfg(feature = "http2")]
                {
                    builder = builder.http2_adaptive_window(true);
                }
                let http_client = builder.build().map_err(ValidationErr::HttpClientBuild)?;
                Arc::new(ReqwestTransport::new(http_client))
            }
        };

        Ok(B2Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                options: self.options,
                transport,
                user_agent,
            }),
        })
    }
}

/// Client for the bucket management operations of the B2 native API.
///
/// Cloning is cheap; clones share one immutable configuration and transport.
#[derive(Clone, Debug)]
pub struct B2Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

impl B2Client {
    /// Returns a client using the default transport.
    ///
    /// # Examples
    ///
    /// ```
    /// use backblaze::b2::B2Client;
    /// use backblaze::b2::creds::StaticProvider;
    /// use backblaze::b2::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://api000.backblazeb2.com".parse().unwrap();
    /// let provider = StaticProvider::new("acct1", "tok");
    /// let client = B2Client::new(base_url, provider, Default::default()).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: P,
        options: B2Options,
    ) -> Result<Self, Error> {
        B2ClientBuilder::new(base_url)
            .provider(provider)
            .options(options)
            .build()
    }

    /// Builds a client from the `B2_*` environment variables, see
    /// [`B2ClientBuilder::from_lookup`].
    pub fn from_env() -> Result<Self, Error> {
        B2ClientBuilder::from_lookup(|name| std::env::var(name).ok())?.build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn options(&self) -> &B2Options {
        &self.shared.options
    }

    pub fn account_id(&self) -> String {
        self.shared.provider.fetch().account_id
    }

    /// Sends `request` unless `cancel` fires first, then checks the response
    /// status. Cancellation wins when both are ready.
    pub(crate) async fn execute(
        &self,
        operation: &str,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, Error> {
        let transport = &self.shared.transport;
        log::debug!(
            "{operation}: {} {} ({})",
            request.method,
            request.url,
            transport.name()
        );
        log::trace!(
            "{operation} request body: {}",
            String::from_utf8_lossy(&request.body)
        );

        let resp = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("{operation}: cancelled");
                return Err(Error::Cancelled);
            }
            resp = transport.send(request) => resp?,
        };

        log::trace!(
            "{operation} response {}: {}",
            resp.status,
            String::from_utf8_lossy(&resp.body)
        );
        check_response(resp)
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Arc<dyn Provider + Send + Sync + 'static>,
    pub(crate) options: B2Options,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) user_agent: String,
}

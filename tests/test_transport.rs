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

use backblaze::b2::B2ClientBuilder;
use backblaze::b2::creds::StaticProvider;
use backblaze::b2::error::{Error, NetworkError};
use backblaze::b2::types::B2Api;
use backblaze::b2::{B2Client, http::BaseUrl};
use backblaze_common::utils::init_logger;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

fn reqwest_client(base_url: BaseUrl, timeout: Option<Duration>) -> B2Client {
    let mut builder = B2ClientBuilder::new(base_url)
        .provider(StaticProvider::new("acct1", "tok"))
        .no_proxy(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    init_logger();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base_url: BaseUrl = format!("http://127.0.0.1:{port}").parse().unwrap();
    let client = reqwest_client(base_url, Some(Duration::from_secs(5)));

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        client.list_buckets().build().send(&CancellationToken::new()),
    )
    .await
    .expect("request did not finish");

    let err = result.unwrap_err();
    assert!(
        matches!(err, Error::Transport(NetworkError::ReqwestError(ref e)) if e.is_connect()),
        "{err:?}"
    );
}

#[tokio::test]
async fn silent_server_hits_client_timeout() {
    init_logger();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        // accept and hold connections without ever answering
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let base_url: BaseUrl = format!("http://{addr}").parse().unwrap();
    let client = reqwest_client(base_url, Some(Duration::from_millis(100)));

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        client
            .delete_bucket("b1")
            .build()
            .send(&CancellationToken::new()),
    )
    .await
    .expect("client timeout did not fire");
    server.abort();

    let err = result.unwrap_err();
    assert!(
        matches!(err, Error::Transport(NetworkError::ReqwestError(ref e)) if e.is_timeout()),
        "{err:?}"
    );
}

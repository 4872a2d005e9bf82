/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

mod methods;

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};

/// Port the platform API listens on.
pub const API_PORT: u16 = 443;

/// A connected channel that attaches the caller's bearer token to every
/// request.
pub type OasisChannel = InterceptedService<Channel, BearerToken>;

/// A ConnectionProvider hands the API client a connected channel the first
/// time an RPC is made. Tests and tools that talk to something other than
/// the public platform endpoint can bring their own.
#[async_trait::async_trait]
pub trait ConnectionProvider<T: Clone>: Send + Sync + std::fmt::Debug + 'static {
    async fn provide_connection(&self) -> Result<T, Status>;

    /// Return the server URL for the connection, for debug/logging purposes.
    fn connection_url(&self) -> &str;
}

#[derive(Clone, Copy, Debug)]
pub struct RetryConfig {
    pub retries: u32,
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            interval: Duration::from_secs(1),
        }
    }
}

/// Dials `https://{endpoint}:443` with the platform's TLS roots.
pub struct OasisConnectionProvider {
    url: String,
    token: String,
    retry_config: RetryConfig,
    connect_timeout: Duration,
}

impl std::fmt::Debug for OasisConnectionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OasisConnectionProvider")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("retry_config", &self.retry_config)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl OasisConnectionProvider {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self {
            url: endpoint_url(endpoint),
            token: token.to_string(),
            retry_config: RetryConfig::default(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    fn endpoint(&self) -> Result<Endpoint, Status> {
        let tls = ClientTlsConfig::new().with_native_roots();
        Endpoint::from_shared(self.url.clone())
            .and_then(|e| e.tls_config(tls))
            .map(|e| e.connect_timeout(self.connect_timeout))
            .map_err(|e| Status::invalid_argument(format!("invalid endpoint {}: {e}", self.url)))
    }
}

#[async_trait::async_trait]
impl ConnectionProvider<OasisChannel> for OasisConnectionProvider {
    async fn provide_connection(&self) -> Result<OasisChannel, Status> {
        if self.token.is_empty() {
            return Err(Status::unauthenticated("--token missing"));
        }
        let interceptor = BearerToken::new(&self.token)?;
        let endpoint = self.endpoint()?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            match endpoint.connect().await {
                Ok(channel) => {
                    tracing::debug!(url = %self.url, attempt, "Connected to API");
                    return Ok(InterceptedService::new(channel, interceptor));
                }
                Err(e) => {
                    if attempt > self.retry_config.retries {
                        return Err(Status::unavailable(format!(
                            "failed to connect to {}: {e}",
                            self.url
                        )));
                    }
                    tracing::debug!(
                        url = %self.url,
                        attempt,
                        error = %e,
                        "Connecting to API failed, retrying"
                    );
                    tokio::time::sleep(self.retry_config.interval).await;
                }
            }
        }
    }

    fn connection_url(&self) -> &str {
        &self.url
    }
}

/// Builds the URL of the platform API from the `--endpoint` host name.
pub fn endpoint_url(endpoint: &str) -> String {
    let host = endpoint
        .trim()
        .trim_start_matches("https://")
        .trim_end_matches('/');
    if host.contains(':') {
        format!("https://{host}")
    } else {
        format!("https://{host}:{API_PORT}")
    }
}

/// Interceptor adding `authorization: bearer <token>` to each request.
#[derive(Clone)]
pub struct BearerToken(MetadataValue<Ascii>);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl BearerToken {
    pub fn new(token: &str) -> Result<Self, Status> {
        format!("bearer {token}")
            .parse::<MetadataValue<Ascii>>()
            .map(Self)
            .map_err(|_| Status::unauthenticated("token contains invalid characters"))
    }
}

impl Interceptor for BearerToken {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert("authorization", self.0.clone());
        Ok(request)
    }
}

/// Client for the platform API. The connection is established on the first
/// RPC and reused afterwards.
#[derive(Clone, Debug)]
pub struct OasisApiClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    connection_provider: Box<dyn ConnectionProvider<OasisChannel>>,
    connection: tokio::sync::Mutex<Option<OasisChannel>>,
}

impl OasisApiClient {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self::build(OasisConnectionProvider::new(endpoint, token))
    }

    pub fn build<P: ConnectionProvider<OasisChannel>>(connection_provider: P) -> Self {
        let inner = Inner {
            connection_provider: Box::new(connection_provider),
            connection: tokio::sync::Mutex::new(None),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub async fn connection(&self) -> Result<OasisChannel, Status> {
        let mut guard = self.inner.connection.lock().await;
        match guard.deref() {
            Some(channel) => Ok(channel.clone()),
            None => {
                let channel = self.inner.connection_provider.provide_connection().await?;
                guard.replace(channel.clone());
                Ok(channel)
            }
        }
    }

    pub fn url(&self) -> &str {
        self.inner.connection_provider.connection_url()
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(method = path, url = self.url(), "Invoking API");
        let mut grpc = tonic::client::Grpc::new(self.connection().await?);
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = tonic_prost::ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(Request::new(request), PathAndQuery::from_static(path), codec)
            .await
            .inspect_err(|status| {
                tracing::debug!(
                    method = path,
                    code = ?status.code(),
                    message = status.message(),
                    "API call failed"
                )
            })?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_appends_default_port() {
        assert_eq!(
            endpoint_url("api.cloud.arangodb.com"),
            "https://api.cloud.arangodb.com:443"
        );
        assert_eq!(
            endpoint_url("https://api.example.com/"),
            "https://api.example.com:443"
        );
        assert_eq!(endpoint_url("localhost:8443"), "https://localhost:8443");
    }

    #[test]
    fn bearer_token_sets_authorization_header() {
        let mut interceptor = BearerToken::new("s3cret").expect("valid token");
        let request = interceptor
            .call(Request::new(()))
            .expect("interceptor succeeds");
        assert_eq!(
            request
                .metadata()
                .get("authorization")
                .and_then(|v| v.to_str().ok()),
            Some("bearer s3cret")
        );
    }

    #[test]
    fn bearer_token_rejects_control_characters() {
        assert!(BearerToken::new("bad\ntoken").is_err());
    }

    #[test]
    fn provider_debug_redacts_token() {
        let provider = OasisConnectionProvider::new("api.cloud.arangodb.com", "s3cret");
        let printed = format!("{provider:?}");
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }

    #[tokio::test]
    async fn empty_token_fails_first_call() {
        let client = OasisApiClient::new("api.cloud.arangodb.com", "");
        let err = client.get_this_user(()).await.expect_err("no token");
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
        assert_eq!(err.message(), "--token missing");
    }
}

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

//! An in-process platform API for tests. Every RPC is answered by a handler
//! registered for its method path; the paths of all received calls are
//! recorded so tests can check what a command asked the platform for.
mod service;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use rpc::ConnectionProvider;
use rpc::client::{BearerToken, OasisChannel};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Status;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Endpoint, Server};

use crate::service::{
    Backup, Crypto, Data, Example, Iam, MockService, Platform, ResourceManager, Security,
};

type Handler = Box<dyn Fn(&[u8]) -> Result<Vec<u8>, Status> + Send + Sync>;

#[derive(Default)]
pub struct MockApiServer {
    handlers: HashMap<&'static str, Handler>,
}

pub struct MockApiServerHandle {
    pub addr: SocketAddr,
    state: Arc<State>,
    _shutdown_tx: oneshot::Sender<()>,
}

struct State {
    handlers: HashMap<&'static str, Handler>,
    calls: Mutex<Vec<String>>,
}

impl State {
    fn answer(&self, path: &str, request: &[u8]) -> Result<Vec<u8>, Status> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        match self.handlers.get(path) {
            Some(handler) => handler(request),
            None => {
                tracing::debug!(path, "No mock handler registered");
                Err(Status::unimplemented(format!("{path} is not mocked")))
            }
        }
    }
}

impl MockApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers calls to `path` with `handler`. Calls to paths without a
    /// handler fail with UNIMPLEMENTED.
    pub fn on<Req, Resp, F>(mut self, path: &'static str, handler: F) -> Self
    where
        Req: prost::Message + Default,
        Resp: prost::Message,
        F: Fn(Req) -> Result<Resp, Status> + Send + Sync + 'static,
    {
        let handler: Handler = Box::new(move |request: &[u8]| {
            let request = Req::decode(request)
                .map_err(|e| Status::invalid_argument(format!("undecodable request: {e}")))?;
            handler(request).map(|response| response.encode_to_vec())
        });
        self.handlers.insert(path, handler);
        self
    }

    pub async fn spawn(self) -> eyre::Result<MockApiServerHandle> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(State {
            handlers: self.handlers,
            calls: Mutex::new(Vec::new()),
        });

        tracing::debug!(%addr, "Mock API server listening");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(
            Server::builder()
                .add_service(MockService::<ResourceManager>::new(&state))
                .add_service(MockService::<Iam>::new(&state))
                .add_service(MockService::<Crypto>::new(&state))
                .add_service(MockService::<Security>::new(&state))
                .add_service(MockService::<Platform>::new(&state))
                .add_service(MockService::<Data>::new(&state))
                .add_service(MockService::<Backup>::new(&state))
                .add_service(MockService::<Example>::new(&state))
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                    shutdown_rx.await.ok();
                }),
        );

        Ok(MockApiServerHandle {
            addr,
            state,
            _shutdown_tx: shutdown_tx,
        })
    }
}

impl MockApiServerHandle {
    /// Method paths of all calls received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.state
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn called(&self, path: &str) -> bool {
        self.calls().iter().any(|call| call == path)
    }

    pub fn connection_provider(&self) -> MockConnectionProvider {
        MockConnectionProvider {
            url: format!("http://{}", self.addr),
        }
    }
}

/// Connects the API client to a [MockApiServer] over plain HTTP/2.
#[derive(Debug)]
pub struct MockConnectionProvider {
    url: String,
}

#[async_trait::async_trait]
impl ConnectionProvider<OasisChannel> for MockConnectionProvider {
    async fn provide_connection(&self) -> Result<OasisChannel, Status> {
        let channel = Endpoint::from_shared(self.url.clone())
            .map_err(|e| Status::invalid_argument(format!("invalid endpoint {}: {e}", self.url)))?
            .connect()
            .await
            .map_err(|e| Status::unavailable(format!("failed to connect to {}: {e}", self.url)))?;
        Ok(InterceptedService::new(channel, BearerToken::new("mock-token")?))
    }

    fn connection_url(&self) -> &str {
        &self.url
    }
}

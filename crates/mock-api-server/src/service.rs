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

// tower service routing every method of one platform service to the
// registered handlers. Messages pass through undecoded; the handlers
// decode them with the message type they were registered for.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::Arc;

use prost::bytes::{Buf, BufMut};
use rpc::protos::{backup, crypto, data, example, iam, platform, resourcemanager, security};
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::codegen::{Body, BoxFuture, Context, Poll, Service, StdError, http};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::{Request, Response, Status};

use crate::State;

pub trait ServiceName {
    const NAME: &'static str;
}

macro_rules! service_names {
    ($($marker:ident => $name:path,)*) => {
        $(
            pub enum $marker {}

            impl ServiceName for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

service_names! {
    ResourceManager => resourcemanager::service::NAME,
    Iam => iam::service::NAME,
    Crypto => crypto::service::NAME,
    Security => security::service::NAME,
    Platform => platform::service::NAME,
    Data => data::service::NAME,
    Backup => backup::service::NAME,
    Example => example::service::NAME,
}

pub struct MockService<N> {
    state: Arc<State>,
    _name: PhantomData<fn() -> N>,
}

impl<N> MockService<N> {
    pub fn new(state: &Arc<State>) -> Self {
        Self {
            state: state.clone(),
            _name: PhantomData,
        }
    }
}

impl<N> Clone for MockService<N> {
    fn clone(&self) -> Self {
        Self::new(&self.state)
    }
}

impl<N: ServiceName> NamedService for MockService<N> {
    const NAME: &'static str = N::NAME;
}

impl<N, B> Service<http::Request<B>> for MockService<N>
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let method = Method {
            state: self.state.clone(),
            path: request.uri().path().to_string(),
        };
        Box::pin(async move {
            let mut grpc = Grpc::new(RawCodec);
            Ok(grpc.unary(method, request).await)
        })
    }
}

struct Method {
    state: Arc<State>,
    path: String,
}

impl UnaryService<Vec<u8>> for Method {
    type Response = Vec<u8>;
    type Future = std::future::Ready<Result<Response<Vec<u8>>, Status>>;

    fn call(&mut self, request: Request<Vec<u8>>) -> Self::Future {
        let answer = self.state.answer(&self.path, &request.into_inner());
        std::future::ready(answer.map(Response::new))
    }
}

/// Passes encoded protobuf messages through as bytes.
#[derive(Clone, Copy, Debug, Default)]
struct RawCodec;

impl Codec for RawCodec {
    type Encode = Vec<u8>;
    type Decode = Vec<u8>;
    type Encoder = RawCodec;
    type Decoder = RawCodec;

    fn encoder(&mut self) -> Self::Encoder {
        RawCodec
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawCodec
    }
}

impl Encoder for RawCodec {
    type Item = Vec<u8>;
    type Error = Status;

    fn encode(&mut self, item: Self::Item, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for RawCodec {
    type Item = Vec<u8>;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        let mut message = vec![0; src.remaining()];
        src.copy_to_slice(&mut message);
        Ok(Some(message))
    }
}

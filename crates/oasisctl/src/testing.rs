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

// Runs command bodies against an in-process platform API and captures
// what they print.

use mock_api_server::{MockApiServer, MockApiServerHandle};
use rpc::OasisApiClient;
use rpc::cli::OutputFormat;
use tokio::io::{AsyncReadExt, DuplexStream};

use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::rpc::ApiClient;

const OUTPUT_BUFFER_SIZE: usize = 64 * 1024;

pub struct TestRuntime {
    pub ctx: RuntimeContext,
    pub api: MockApiServerHandle,
    output: DuplexStream,
}

impl TestRuntime {
    pub async fn start(server: MockApiServer) -> Self {
        let api = server.spawn().await.expect("mock API server starts");
        let api_client = ApiClient(OasisApiClient::build(api.connection_provider()));
        let (writer, output) = tokio::io::duplex(OUTPUT_BUFFER_SIZE);
        let mut ctx = RuntimeContext::new(
            api_client,
            RuntimeConfig {
                format: OutputFormat::Table,
                endpoint: api.addr.to_string(),
            },
        );
        ctx.output_file = Box::pin(writer);
        Self { ctx, api, output }
    }

    /// Everything written by the commands run so far.
    pub async fn output(self) -> String {
        let Self { ctx, mut output, .. } = self;
        drop(ctx);
        let mut text = String::new();
        output
            .read_to_string(&mut text)
            .await
            .expect("output is readable");
        text
    }
}

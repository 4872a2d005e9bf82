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

use std::pin::Pin;

use rpc::cli::OutputFormat;

use crate::rpc::ApiClient;

// RuntimeContext is built once from the parsed command line and
// handed to the dispatcher of the selected command.
pub struct RuntimeContext {
    pub api_client: ApiClient,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig holds the global options every command may need.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub endpoint: String,
}

impl RuntimeContext {
    pub fn new(api_client: ApiClient, config: RuntimeConfig) -> Self {
        Self {
            api_client,
            config,
            output_file: Box::pin(tokio::io::stdout()),
        }
    }
}

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

use rpc::cli::{OasisCliResult, OutputFormat};
use serde::Serialize;

use super::args::Opts;
use crate::async_writeln;
use crate::cfg::runtime::RuntimeContext;

#[derive(Serialize)]
struct VersionInfo {
    build_version: &'static str,
    build_date: &'static str,
    git_sha: &'static str,
    rust_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
}

pub async fn show(opts: Opts, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let api_version = if opts.show_api {
        Some(ctx.api_client.0.get_api_version(()).await?.to_string())
    } else {
        None
    };

    match ctx.config.format {
        OutputFormat::Table => {
            async_writeln!(ctx.output_file, "oasisctl:\n\t{}", oasis_version::version!())?;
            if let Some(api_version) = api_version {
                async_writeln!(
                    ctx.output_file,
                    "\napi ({}):\n\t{api_version}",
                    ctx.config.endpoint
                )?;
            }
        }
        format => {
            let info = VersionInfo {
                build_version: oasis_version::v!(build_version),
                build_date: oasis_version::v!(build_date),
                git_sha: oasis_version::v!(git_sha),
                rust_version: oasis_version::v!(rust_version),
                api_version,
            };
            let rendered = if format == OutputFormat::Json {
                serde_json::to_string_pretty(&info)?
            } else {
                serde_yaml::to_string(&info)?
            };
            async_writeln!(ctx.output_file, "{}", rendered.trim_end())?;
        }
    }
    Ok(())
}

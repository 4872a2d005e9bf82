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

mod apikey;
mod async_write;
mod backup;
mod cacertificate;
mod cfg;
mod deployment;
mod example;
mod generate_docs;
mod generate_shell_complete;
mod group;
mod ipwhitelist;
mod organization;
mod output;
mod permission;
mod policy;
mod project;
mod provider;
mod region;
mod role;
mod rpc;
mod selection;
#[cfg(test)]
mod testing;
mod user;
mod version;

use tracing::level_filters::LevelFilter;

use crate::cfg::cli_options::CliOptions;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::rpc::ApiClient;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = CliOptions::load();
    setup_logging(config.debug)?;

    rustls::crypto::ring::default_provider()
        .install_default()
        .inspect_err(|crypto_provider| {
            tracing::debug!("Crypto provider already configured: {crypto_provider:?}")
        })
        .ok(); // if something else is already default, ignore.

    let api_client = ApiClient::new(&config.endpoint, &config.token);
    let ctx = RuntimeContext::new(
        api_client,
        RuntimeConfig {
            format: config.format,
            endpoint: config.endpoint.clone(),
        },
    );

    if let Err(e) = config.command.dispatch(ctx).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    Ok(())
}

fn setup_logging(debug: bool) -> color_eyre::Result<()> {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {e}"))
}

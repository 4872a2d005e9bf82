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

use rpc::cli::OasisCliResult;
use rpc::protos::common::ListOptions;
use rpc::protos::platform::{ListProvidersRequest, Provider};

use super::args::{GetProvider, ListProviders};
use crate::cfg::args::opt_option;
use crate::cfg::runtime::RuntimeContext;
use crate::output::Render;
use crate::selection::{organization_filter, select_provider};

impl Render for Provider {
    const COLUMNS: &'static [&'static str] = &["Id", "Name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

pub async fn get(args: GetProvider, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.provider_id.as_deref())?;
    let provider = select_provider(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.write_item(&provider).await
}

pub async fn list(args: ListProviders, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organization_id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization_id = organization_filter(&ctx.api_client, organization_id).await?;
    let providers = ctx
        .api_client
        .0
        .list_providers(ListProvidersRequest {
            options: Some(ListOptions::default()),
            organization_id,
        })
        .await?;
    ctx.write_list(&providers.items).await
}

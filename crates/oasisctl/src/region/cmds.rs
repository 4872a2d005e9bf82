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
use rpc::protos::platform::{ListRegionsRequest, Region};

use super::args::{GetRegion, ListRegions};
use crate::cfg::args::{non_empty, opt_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag};
use crate::selection::{organization_filter, select_provider, select_region};

impl Render for Region {
    const COLUMNS: &'static [&'static str] = &["Id", "Provider", "Location", "Available"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.provider_id.clone(),
            self.location.clone(),
            fmt_flag(self.available),
        ]
    }
}

pub async fn get(args: GetRegion, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.region_id.as_deref())?;
    let region = select_region(
        &ctx.api_client,
        id,
        non_empty(args.provider_id.as_deref()),
        args.scope.organization_id(),
    )
    .await?;
    ctx.write_item(&region).await
}

pub async fn list(args: ListRegions, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let provider_id = opt_option(args.id.as_deref(), args.provider_id.as_deref())?;
    let provider =
        select_provider(&ctx.api_client, provider_id, args.scope.organization_id()).await?;
    let organization_id =
        organization_filter(&ctx.api_client, args.scope.organization_id()).await?;
    let regions = ctx
        .api_client
        .0
        .list_regions(ListRegionsRequest {
            options: Some(ListOptions::default()),
            provider_id: provider.id,
            organization_id,
        })
        .await?;
    ctx.write_list(&regions.items).await
}

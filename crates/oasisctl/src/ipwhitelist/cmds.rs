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
use rpc::protos::security::IpWhitelist;

use super::args::{
    CreateIpWhitelist, DeleteIpWhitelist, GetIpWhitelist, ListIpWhitelists, UpdateIpWhitelist,
};
use crate::cfg::args::{apply_change, apply_list_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_list, fmt_time};
use crate::selection::{select_ip_whitelist, select_project};

impl Render for IpWhitelist {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "CIDR Ranges",
        "Url",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            fmt_list(&self.cidr_ranges),
            self.url.clone(),
            fmt_time(&self.created_at),
        ]
    }
}

pub async fn get(args: GetIpWhitelist, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.ipwhitelist_id.as_deref())?;
    let whitelist = select_ip_whitelist(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.write_item(&whitelist).await
}

pub async fn list(args: ListIpWhitelists, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let project_id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project =
        select_project(&ctx.api_client, project_id, args.scope.organization_id()).await?;
    let whitelists = ctx
        .api_client
        .0
        .list_ip_whitelists(ListOptions::in_context(project.id))
        .await?;
    ctx.write_list(&whitelists.items).await
}

pub async fn create(args: CreateIpWhitelist, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let project = select_project(
        &ctx.api_client,
        args.scope.project_id(),
        args.scope.organization_id(),
    )
    .await?;
    let whitelist = ctx
        .api_client
        .0
        .create_ip_whitelist(IpWhitelist {
            project_id: project.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            cidr_ranges: args.cidr_ranges,
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&whitelist).await
}

pub async fn update(args: UpdateIpWhitelist, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.ipwhitelist_id.as_deref())?;
    let mut whitelist = select_ip_whitelist(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;

    let mut changed = apply_change(&mut whitelist.name, args.name);
    changed |= apply_change(&mut whitelist.description, args.description);
    changed |= apply_list_change(
        &mut whitelist.cidr_ranges,
        &args.add_cidr_ranges,
        &args.remove_cidr_ranges,
    );
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let whitelist = ctx.api_client.0.update_ip_whitelist(whitelist).await?;
    ctx.write_success().await?;
    ctx.write_item(&whitelist).await
}

pub async fn delete(args: DeleteIpWhitelist, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.ipwhitelist_id.as_deref())?;
    let whitelist = select_ip_whitelist(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.api_client
        .0
        .delete_ip_whitelist(whitelist.id.as_str())
        .await?;
    ctx.write_success().await
}

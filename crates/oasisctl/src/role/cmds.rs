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
use rpc::protos::iam::Role;

use super::args::{CreateRole, DeleteRole, GetRole, ListRoles, UpdateRole};
use crate::cfg::args::{apply_change, apply_list_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_list, fmt_time};
use crate::selection::{select_organization, select_role};

impl Render for Role {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Predefined",
        "Permissions",
        "Url",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            fmt_flag(self.is_predefined),
            fmt_list(&self.permissions),
            self.url.clone(),
            fmt_time(&self.created_at),
        ]
    }
}

pub async fn get(args: GetRole, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.role_id.as_deref())?;
    let role = select_role(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.write_item(&role).await
}

pub async fn list(args: ListRoles, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organization_id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, organization_id).await?;
    let roles = ctx
        .api_client
        .0
        .list_roles(ListOptions::in_context(organization.id))
        .await?;
    ctx.write_list(&roles.items).await
}

pub async fn create(args: CreateRole, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let organization =
        select_organization(&ctx.api_client, args.scope.organization_id()).await?;
    let role = ctx
        .api_client
        .0
        .create_role(Role {
            organization_id: organization.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            permissions: args.permissions,
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&role).await
}

pub async fn update(args: UpdateRole, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.role_id.as_deref())?;
    let mut role = select_role(&ctx.api_client, id, args.scope.organization_id()).await?;

    let mut changed = apply_change(&mut role.name, args.name);
    changed |= apply_change(&mut role.description, args.description);
    changed |= apply_list_change(
        &mut role.permissions,
        &args.add_permissions,
        &args.remove_permissions,
    );
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let role = ctx.api_client.0.update_role(role).await?;
    ctx.write_success().await?;
    ctx.write_item(&role).await
}

pub async fn delete(args: DeleteRole, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.role_id.as_deref())?;
    let role = select_role(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client.0.delete_role(role.id.as_str()).await?;
    ctx.write_success().await
}

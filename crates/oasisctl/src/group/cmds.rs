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
use rpc::protos::iam::{Group, GroupMembersRequest, User};

use super::args::{CreateGroup, DeleteGroup, GetGroup, GroupMembers, ListGroups, UpdateGroup};
use crate::cfg::args::{apply_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_time};
use crate::selection::{select_group, select_organization};
use crate::user::cmds::{resolve_user_emails, users_by_email};

impl Render for Group {
    const COLUMNS: &'static [&'static str] = &["Id", "Name", "Description", "Url", "Created At"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.url.clone(),
            fmt_time(&self.created_at),
        ]
    }
}

pub async fn get(args: GetGroup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.write_item(&group).await
}

pub async fn list(args: ListGroups, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organization_id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, organization_id).await?;
    let groups = ctx
        .api_client
        .0
        .list_groups(ListOptions::in_context(organization.id))
        .await?;
    ctx.write_list(&groups.items).await
}

pub async fn create(args: CreateGroup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let organization =
        select_organization(&ctx.api_client, args.scope.organization_id()).await?;
    let group = ctx
        .api_client
        .0
        .create_group(Group {
            organization_id: organization.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&group).await
}

pub async fn update(args: UpdateGroup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let mut group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;

    let mut changed = apply_change(&mut group.name, args.name);
    changed |= apply_change(&mut group.description, args.description);
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let group = ctx.api_client.0.update_group(group).await?;
    ctx.write_success().await?;
    ctx.write_item(&group).await
}

pub async fn delete(args: DeleteGroup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client.0.delete_group(group.id.as_str()).await?;
    ctx.write_success().await
}

/////////////////////////////////////////////////////////////////////////////
// Members

pub async fn list_members(args: GetGroup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;
    let members = ctx
        .api_client
        .0
        .list_group_members(ListOptions::in_context(group.id))
        .await?;

    let mut users: Vec<User> = Vec::with_capacity(members.items.len());
    for user_id in &members.items {
        users.push(ctx.api_client.0.get_user(user_id.as_str()).await?);
    }
    ctx.write_list(&users).await
}

pub async fn add_members(args: GroupMembers, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;

    // New group members must already be members of the group's organization.
    let organization = ctx
        .api_client
        .0
        .get_organization(group.organization_id.as_str())
        .await?;
    let members = ctx
        .api_client
        .0
        .list_organization_members(ListOptions::in_context(organization.id.as_str()))
        .await?;
    let users = users_by_email(
        &ctx.api_client,
        members.items.iter().map(|m| m.user_id.as_str()),
    )
    .await?;
    let scope = format!("organization '{}'", organization.name);
    let user_ids = resolve_user_emails(&users, &args.user_emails, &scope)?;

    tracing::debug!(group_id = %group.id, count = user_ids.len(), "Adding group members");
    ctx.api_client
        .0
        .add_group_members(GroupMembersRequest {
            group_id: group.id,
            user_ids,
        })
        .await?;
    ctx.write_success().await
}

pub async fn delete_members(args: GroupMembers, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.group_id.as_deref())?;
    let group = select_group(&ctx.api_client, id, args.scope.organization_id()).await?;

    let members = ctx
        .api_client
        .0
        .list_group_members(ListOptions::in_context(group.id.as_str()))
        .await?;
    let users = users_by_email(&ctx.api_client, members.items.iter().map(String::as_str)).await?;
    let scope = format!("group '{}'", group.name);
    let user_ids = resolve_user_emails(&users, &args.user_emails, &scope)?;

    tracing::debug!(group_id = %group.id, count = user_ids.len(), "Deleting group members");
    ctx.api_client
        .0
        .delete_group_members(GroupMembersRequest {
            group_id: group.id,
            user_ids,
        })
        .await?;
    ctx.write_success().await
}

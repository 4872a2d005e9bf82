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

use rpc::cli::{OasisCliError, OasisCliResult};
use rpc::protos::common::ListOptions;
use rpc::protos::resourcemanager::{
    MemberList, Organization, OrganizationInvite, OrganizationMembersRequest,
};
use serde::Serialize;

use super::args::{
    CreateOrganization, CreateOrganizationInvite, DeleteOrganization, DeleteOrganizationInvite,
    DeleteOrganizationMembers, GetOrganization, GetOrganizationInvite, ListOrganizationInvites,
    ListOrganizationMembers, ListOrganizations, OrganizationInviteResponse, UpdateOrganization,
};
use crate::cfg::args::{apply_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::selection::{select_organization, select_organization_invite};
use crate::user::cmds::{resolve_user_emails, users_by_email};

impl Render for Organization {
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

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut details: Vec<_> = Self::COLUMNS.iter().copied().zip(self.cells()).collect();
        if self.is_deleted {
            details.push(("Deleted At", fmt_time(&self.deleted_at)));
        }
        details
    }
}

impl Render for OrganizationInvite {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Organization",
        "Email",
        "Accepted",
        "Rejected",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        let organization = if self.organization_name.is_empty() {
            self.organization_id.clone()
        } else {
            self.organization_name.clone()
        };
        vec![
            self.id.clone(),
            organization,
            self.email.clone(),
            fmt_flag(self.accepted),
            fmt_flag(self.rejected),
            fmt_time(&self.created_at),
        ]
    }
}

/// An invite together with the email address of the member who sent it.
#[derive(Serialize)]
struct SentInvite {
    #[serde(flatten)]
    invite: OrganizationInvite,
    created_by: String,
}

impl Render for SentInvite {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Email",
        "Created By",
        "Accepted",
        "Rejected",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.invite.id.clone(),
            self.invite.email.clone(),
            self.created_by.clone(),
            fmt_flag(self.invite.accepted),
            fmt_flag(self.invite.rejected),
            fmt_time(&self.invite.created_at),
        ]
    }
}

#[derive(Serialize)]
struct OrganizationMember {
    user_id: String,
    name: String,
    email: String,
    owner: bool,
}

impl Render for OrganizationMember {
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Owner", "Id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            fmt_flag(self.owner),
            self.user_id.clone(),
        ]
    }
}

pub async fn get(args: GetOrganization, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, id).await?;
    ctx.write_item(&organization).await
}

pub async fn list(_args: ListOrganizations, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organizations = ctx
        .api_client
        .0
        .list_organizations(ListOptions::default())
        .await?;
    ctx.write_list(&organizations.items).await
}

pub async fn create(args: CreateOrganization, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let organization = ctx
        .api_client
        .0
        .create_organization(Organization {
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&organization).await
}

pub async fn update(args: UpdateOrganization, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let mut organization = select_organization(&ctx.api_client, id).await?;

    let mut changed = apply_change(&mut organization.name, args.name);
    changed |= apply_change(&mut organization.description, args.description);
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let organization = ctx.api_client.0.update_organization(organization).await?;
    ctx.write_success().await?;
    ctx.write_item(&organization).await
}

pub async fn delete(args: DeleteOrganization, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, id).await?;
    ctx.api_client
        .0
        .delete_organization(organization.id.as_str())
        .await?;
    ctx.write_success().await
}

/////////////////////////////////////////////////////////////////////////////
// Invites

pub async fn get_invite(
    args: GetOrganizationInvite,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.invite_id.as_deref())?;
    let invite =
        select_organization_invite(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.write_item(&invite).await
}

pub async fn list_invites(
    args: ListOrganizationInvites,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, id).await?;
    let invites = ctx
        .api_client
        .0
        .list_organization_invites(ListOptions::in_context(organization.id))
        .await?;

    let mut sent = Vec::with_capacity(invites.items.len());
    for invite in invites.items {
        let created_by = match ctx.api_client.0.get_user(invite.created_by_id.as_str()).await {
            Ok(user) => user.email,
            Err(status) => {
                tracing::warn!(
                    user_id = invite.created_by_id,
                    error = %status,
                    "Failed to get the user who sent an invite"
                );
                invite.created_by_id.clone()
            }
        };
        sent.push(SentInvite { invite, created_by });
    }
    ctx.write_list(&sent).await
}

pub async fn create_invite(
    args: CreateOrganizationInvite,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let email = req_option("email", args.email_arg.as_deref(), args.email.as_deref())?;
    let organization =
        select_organization(&ctx.api_client, args.scope.organization_id()).await?;
    let invite = ctx
        .api_client
        .0
        .create_organization_invite(OrganizationInvite {
            organization_id: organization.id,
            email: email.to_string(),
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&invite).await
}

pub async fn delete_invite(
    args: DeleteOrganizationInvite,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.invite_id.as_deref())?;
    let invite =
        select_organization_invite(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client
        .0
        .delete_organization_invite(invite.id.as_str())
        .await?;
    ctx.write_success().await
}

pub async fn accept_invite(
    args: OrganizationInviteResponse,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.invite_id.as_deref())?;
    let invite =
        select_organization_invite(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client
        .0
        .accept_organization_invite(invite.id.as_str())
        .await?;

    let name = match ctx
        .api_client
        .0
        .get_organization(invite.organization_id.as_str())
        .await
    {
        Ok(organization) => organization.name,
        Err(status) => {
            tracing::warn!(
                organization_id = invite.organization_id,
                error = %status,
                "Failed to get the organization of an accepted invite"
            );
            invite.organization_id.clone()
        }
    };
    ctx.write_success().await?;
    ctx.write_message(&format!(
        "You are now a member of the '{name}' organization."
    ))
    .await
}

pub async fn reject_invite(
    args: OrganizationInviteResponse,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.invite_id.as_deref())?;
    let invite =
        select_organization_invite(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client
        .0
        .reject_organization_invite(invite.id.as_str())
        .await?;
    ctx.write_success().await?;
    ctx.write_message("You have rejected the invite.").await
}

/////////////////////////////////////////////////////////////////////////////
// Members

pub async fn list_members(
    args: ListOrganizationMembers,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, id).await?;
    let members = ctx
        .api_client
        .0
        .list_organization_members(ListOptions::in_context(organization.id))
        .await?;

    let mut rows = Vec::with_capacity(members.items.len());
    for member in members.items {
        let user = ctx.api_client.0.get_user(member.user_id.as_str()).await?;
        rows.push(OrganizationMember {
            user_id: member.user_id,
            name: user.name,
            email: user.email,
            owner: member.owner,
        });
    }
    ctx.write_list(&rows).await
}

pub async fn delete_members(
    args: DeleteOrganizationMembers,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, id).await?;
    if organization.is_deleted {
        return Err(OasisCliError::GenericError(format!(
            "Cannot delete members of deleted organization '{}'",
            organization.name
        )));
    }

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

    let remove: Vec<_> = members
        .items
        .into_iter()
        .filter(|m| user_ids.contains(&m.user_id))
        .collect();
    tracing::debug!(
        organization_id = organization.id,
        count = remove.len(),
        "Deleting organization members"
    );
    ctx.api_client
        .0
        .delete_organization_members(OrganizationMembersRequest {
            organization_id: organization.id,
            members: Some(MemberList { items: remove }),
        })
        .await?;
    ctx.write_success().await
}

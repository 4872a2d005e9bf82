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
use rpc::protos::iam::{
    MEMBER_ID_GROUP_PREFIX, MEMBER_ID_USER_PREFIX, Policy, RoleBinding, RoleBindingsRequest,
    member_id_from_group_id, member_id_from_user_id,
};
use serde::Serialize;

use super::args::{GetPolicy, PolicyBinding};
use crate::cfg::args::req_option;
use crate::cfg::runtime::RuntimeContext;
use crate::output::Render;
use crate::rpc::ApiClient;

/// A role binding with the role and member resolved to readable names.
#[derive(Serialize, Debug, PartialEq)]
pub struct BindingRow {
    pub id: String,
    pub role_id: String,
    pub role: String,
    pub member_id: String,
    pub member: String,
}

impl Render for BindingRow {
    const COLUMNS: &'static [&'static str] = &["Id", "Role", "Member", "Member Id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.role.clone(),
            self.member.clone(),
            self.member_id.clone(),
        ]
    }
}

/// Builds the bindings of `role_id` for all given users and groups.
pub fn role_bindings(
    url: &str,
    role_id: &str,
    user_ids: &[String],
    group_ids: &[String],
) -> OasisCliResult<RoleBindingsRequest> {
    if user_ids.is_empty() && group_ids.is_empty() {
        return Err(OasisCliError::GenericError(
            "Provide at least one --user-id or --group-id".to_string(),
        ));
    }
    let members = user_ids
        .iter()
        .map(|id| member_id_from_user_id(id))
        .chain(group_ids.iter().map(|id| member_id_from_group_id(id)));
    Ok(RoleBindingsRequest {
        resource_url: url.to_string(),
        bindings: members
            .map(|member_id| RoleBinding {
                member_id,
                role_id: role_id.to_string(),
                ..Default::default()
            })
            .collect(),
    })
}

async fn member_name(api: &ApiClient, member_id: &str) -> Result<String, tonic::Status> {
    if let Some(user_id) = member_id.strip_prefix(MEMBER_ID_USER_PREFIX) {
        let user = api.0.get_user(user_id).await?;
        return Ok(format!("user {}", user.email));
    }
    if let Some(group_id) = member_id.strip_prefix(MEMBER_ID_GROUP_PREFIX) {
        let group = api.0.get_group(group_id).await?;
        return Ok(format!("group {}", group.name));
    }
    Ok(member_id.to_string())
}

/// Resolves role and member names of all bindings of a policy. Names that
/// cannot be fetched fall back to the identifiers.
pub async fn binding_rows(api: &ApiClient, policy: Policy) -> Vec<BindingRow> {
    let mut rows = Vec::with_capacity(policy.bindings.len());
    for binding in policy.bindings {
        let role = match api.0.get_role(binding.role_id.as_str()).await {
            Ok(role) => role.name,
            Err(status) => {
                tracing::warn!(role_id = %binding.role_id, error = %status, "Failed to get role");
                binding.role_id.clone()
            }
        };
        let member = match member_name(api, &binding.member_id).await {
            Ok(name) => name,
            Err(status) => {
                tracing::warn!(
                    member_id = %binding.member_id,
                    error = %status,
                    "Failed to get member"
                );
                binding.member_id.clone()
            }
        };
        rows.push(BindingRow {
            id: binding.id,
            role_id: binding.role_id,
            role,
            member_id: binding.member_id,
            member,
        });
    }
    rows
}

pub async fn get(args: GetPolicy, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let url = req_option("url", args.url_arg.as_deref(), args.url.as_deref())?;
    let policy = ctx.api_client.0.get_policy(url).await?;
    let rows = binding_rows(&ctx.api_client, policy).await;
    ctx.write_list(&rows).await
}

pub async fn add_binding(args: PolicyBinding, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let url = req_option("url", args.url_arg.as_deref(), args.url.as_deref())?;
    let role_id = req_option("role-id", None, args.role_id.as_deref())?;
    let request = role_bindings(url, role_id, &args.user_ids, &args.group_ids)?;
    let policy = ctx.api_client.0.add_role_bindings(request).await?;
    let rows = binding_rows(&ctx.api_client, policy).await;
    ctx.write_success().await?;
    ctx.write_list(&rows).await
}

pub async fn delete_binding(args: PolicyBinding, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let url = req_option("url", args.url_arg.as_deref(), args.url.as_deref())?;
    let role_id = req_option("role-id", None, args.role_id.as_deref())?;
    let request = role_bindings(url, role_id, &args.user_ids, &args.group_ids)?;
    let policy = ctx.api_client.0.delete_role_bindings(request).await?;
    let rows = binding_rows(&ctx.api_client, policy).await;
    ctx.write_success().await?;
    ctx.write_list(&rows).await
}

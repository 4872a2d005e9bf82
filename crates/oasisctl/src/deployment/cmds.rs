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
use rpc::protos::data::{
    CertificateSpec, Deployment, ServersSpec, ServersSpecPreset, ServersSpecPresetsRequest,
};

use super::args::{
    CreateDeployment, DeleteDeployment, GetDeployment, ListDeployments, ListServersSpecPresets,
    UpdateDeployment,
};
use crate::cfg::args::{apply_change, non_empty, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::rpc::ApiClient;
use crate::selection::{select_ca_certificate, select_deployment, select_project};

impl Render for Deployment {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Region",
        "Version",
        "Ready",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        let ready = self.status.as_ref().is_some_and(|s| s.ready);
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.region_id.clone(),
            self.version.clone(),
            fmt_flag(ready),
            fmt_time(&self.created_at),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let status = self.status.clone().unwrap_or_default();
        let mut details = vec![
            ("Id", self.id.clone()),
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("Region", self.region_id.clone()),
            ("Version", self.version.clone()),
            ("Url", self.url.clone()),
            ("Endpoint", status.endpoint),
            ("Status", status.description),
            ("Ready", fmt_flag(status.ready)),
            ("Upgrading", fmt_flag(status.upgrading)),
            ("CA Certificate", self.ca_certificate_id().to_string()),
            ("IP Whitelist", self.ipwhitelist_id.clone()),
            ("Created At", fmt_time(&self.created_at)),
        ];
        if let Some(servers) = &self.servers {
            details.push(("Servers", fmt_servers(servers)));
        }
        details
    }
}

fn fmt_servers(servers: &ServersSpec) -> String {
    format!(
        "{} coordinators ({}GB), {} dbservers ({}GB memory, {}GB disk)",
        servers.coordinators,
        servers.coordinator_memory_size,
        servers.dbservers,
        servers.dbserver_memory_size,
        servers.dbserver_disk_size
    )
}

impl Render for ServersSpecPreset {
    const COLUMNS: &'static [&'static str] = &["Name", "Servers"];

    fn cells(&self) -> Vec<String> {
        let servers = self.servers.as_ref().map(fmt_servers).unwrap_or_default();
        vec![self.name.clone(), servers]
    }
}

/// Finds the servers specification of the preset with exactly the given name.
pub async fn find_servers_preset(
    api: &ApiClient,
    project_id: &str,
    region_id: &str,
    preset: &str,
) -> OasisCliResult<ServersSpec> {
    let presets = api
        .0
        .list_servers_spec_presets(ServersSpecPresetsRequest {
            project_id: project_id.to_string(),
            region_id: region_id.to_string(),
        })
        .await?;
    presets
        .items
        .into_iter()
        .find(|p| p.name == preset)
        .map(|p| p.servers.unwrap_or_default())
        .ok_or_else(|| OasisCliError::NotFound {
            kind: "servers preset",
            id: preset.to_string(),
        })
}

pub async fn get(args: GetDeployment, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.deployment_id())?;
    let deployment = select_deployment(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.write_item(&deployment).await
}

pub async fn list(args: ListDeployments, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let project_id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project =
        select_project(&ctx.api_client, project_id, args.scope.organization_id()).await?;
    let deployments = ctx
        .api_client
        .0
        .list_deployments(ListOptions::in_context(project.id))
        .await?;
    ctx.write_list(&deployments.items).await
}

pub async fn create(args: CreateDeployment, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let region_id = req_option("region-id", None, args.region_id.as_deref())?;

    let project = select_project(
        &ctx.api_client,
        args.scope.project_id(),
        args.scope.organization_id(),
    )
    .await?;
    let ca_certificate = select_ca_certificate(
        &ctx.api_client,
        non_empty(args.cacertificate_id.as_deref()),
        Some(project.organization_id.as_str()),
        Some(project.id.as_str()),
    )
    .await?;

    let servers = match non_empty(args.servers_preset.as_deref()) {
        Some(preset) => {
            Some(find_servers_preset(&ctx.api_client, &project.id, region_id, preset).await?)
        }
        None => None,
    };

    let deployment = ctx
        .api_client
        .0
        .create_deployment(Deployment {
            project_id: project.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            region_id: region_id.to_string(),
            version: args.version.unwrap_or_default(),
            certificates: Some(CertificateSpec {
                ca_certificate_id: ca_certificate.id,
                ..Default::default()
            }),
            ipwhitelist_id: args.ipwhitelist_id.unwrap_or_default(),
            servers,
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&deployment).await
}

pub async fn update(args: UpdateDeployment, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.deployment_id())?;
    let mut deployment = select_deployment(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;

    let mut changed = apply_change(&mut deployment.name, args.name);
    changed |= apply_change(&mut deployment.description, args.description);
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let deployment = ctx.api_client.0.update_deployment(deployment).await?;
    ctx.write_success().await?;
    ctx.write_item(&deployment).await
}

pub async fn delete(args: DeleteDeployment, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.deployment_id())?;
    let deployment = select_deployment(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.api_client
        .0
        .delete_deployment(deployment.id.as_str())
        .await?;
    tracing::debug!(deployment_id = %deployment.id, "Deleted deployment");
    ctx.write_success().await
}

pub async fn list_servers_presets(
    args: ListServersSpecPresets,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let region_id = req_option("region-id", None, args.region_id.as_deref())?;
    let project_id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project =
        select_project(&ctx.api_client, project_id, args.scope.organization_id()).await?;
    let presets = ctx
        .api_client
        .0
        .list_servers_spec_presets(ServersSpecPresetsRequest {
            project_id: project.id,
            region_id: region_id.to_string(),
        })
        .await?;
    ctx.write_list(&presets.items).await
}

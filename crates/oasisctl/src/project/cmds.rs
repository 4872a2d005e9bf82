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
use rpc::protos::resourcemanager::Project;

use super::args::{CreateProject, DeleteProject, GetProject, ListProjects, UpdateProject};
use crate::cfg::args::{apply_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_time};
use crate::selection::{select_organization, select_project};

impl Render for Project {
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

pub async fn get(args: GetProject, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project = select_project(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.write_item(&project).await
}

pub async fn list(args: ListProjects, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organization_id = opt_option(args.id.as_deref(), args.scope.organization_id())?;
    let organization = select_organization(&ctx.api_client, organization_id).await?;
    let projects = ctx
        .api_client
        .0
        .list_projects(ListOptions::in_context(organization.id))
        .await?;
    ctx.write_list(&projects.items).await
}

pub async fn create(args: CreateProject, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let organization =
        select_organization(&ctx.api_client, args.scope.organization_id()).await?;
    let project = ctx
        .api_client
        .0
        .create_project(Project {
            organization_id: organization.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&project).await
}

pub async fn update(args: UpdateProject, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let mut project = select_project(&ctx.api_client, id, args.scope.organization_id()).await?;

    let mut changed = apply_change(&mut project.name, args.name);
    changed |= apply_change(&mut project.description, args.description);
    if !changed {
        return ctx.write_message("No changes").await;
    }

    let project = ctx.api_client.0.update_project(project).await?;
    ctx.write_success().await?;
    ctx.write_item(&project).await
}

pub async fn delete(args: DeleteProject, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project = select_project(&ctx.api_client, id, args.scope.organization_id()).await?;
    ctx.api_client.0.delete_project(project.id.as_str()).await?;
    ctx.write_success().await
}

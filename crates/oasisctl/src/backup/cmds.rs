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
use rpc::protos::backup::{Backup, ListBackupsRequest};
use rpc::protos::common::ListOptions;
use rpc::protos::timestamp;

use super::args::{CreateBackup, DeleteBackup, GetBackup, ListBackups};
use crate::cfg::args::{opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::selection::{select_backup, select_deployment};

impl Render for Backup {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Deployment",
        "Uploaded",
        "Created At",
        "Auto Deleted At",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.deployment_id.clone(),
            fmt_flag(self.upload),
            fmt_time(&self.created_at),
            fmt_time(&self.auto_deleted_at),
        ]
    }
}

pub async fn get(args: GetBackup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.backup_id.as_deref())?;
    let backup = select_backup(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
        args.scope.deployment_id(),
    )
    .await?;
    ctx.write_item(&backup).await
}

pub async fn list(args: ListBackups, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let deployment_id = opt_option(args.id.as_deref(), args.scope.deployment_id())?;
    let deployment = select_deployment(
        &ctx.api_client,
        deployment_id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    let backups = ctx
        .api_client
        .0
        .list_backups(ListBackupsRequest {
            deployment_id: deployment.id,
            from: args.from.as_ref().map(timestamp::from_datetime),
            to: args.to.as_ref().map(timestamp::from_datetime),
            options: Some(ListOptions::default()),
        })
        .await?;
    ctx.write_list(&backups.items).await
}

pub async fn create(args: CreateBackup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let deployment = select_deployment(
        &ctx.api_client,
        args.scope.deployment_id(),
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    let backup = ctx
        .api_client
        .0
        .create_backup(Backup {
            deployment_id: deployment.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            upload: args.upload,
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&backup).await
}

pub async fn delete(args: DeleteBackup, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.backup_id.as_deref())?;
    let backup = select_backup(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
        args.scope.deployment_id(),
    )
    .await?;
    ctx.api_client.0.delete_backup(backup.id.as_str()).await?;
    ctx.write_success().await
}

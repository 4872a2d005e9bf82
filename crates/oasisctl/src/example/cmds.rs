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
use rpc::protos::example::{
    ExampleDataset, ExampleDatasetInstallation, ListExampleDatasetInstallationsRequest,
    ListExampleDatasetsRequest,
};

use super::args::{
    CreateExampleInstallation, ExampleInstallation, ListExampleDatasets, ListExampleInstallations,
};
use crate::cfg::args::{opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::selection::{organization_filter, select_deployment};

impl Render for ExampleDataset {
    const COLUMNS: &'static [&'static str] = &["Id", "Name", "Description", "Created At"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            fmt_time(&self.created_at),
        ]
    }
}

impl Render for ExampleDatasetInstallation {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Deployment",
        "Dataset",
        "Database",
        "State",
        "Available",
        "Failed",
        "Created At",
    ];

    fn cells(&self) -> Vec<String> {
        let status = self.status.clone().unwrap_or_default();
        vec![
            self.id.clone(),
            self.deployment_id.clone(),
            self.exampledataset_id.clone(),
            status.database_name,
            status.state,
            fmt_flag(status.is_available),
            fmt_flag(status.is_failed),
            fmt_time(&self.created_at),
        ]
    }
}

pub async fn list_datasets(
    args: ListExampleDatasets,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let organization_id =
        organization_filter(&ctx.api_client, args.scope.organization_id()).await?;
    let datasets = ctx
        .api_client
        .0
        .list_example_datasets(ListExampleDatasetsRequest {
            organization_id,
            options: Some(ListOptions::default()),
        })
        .await?;
    ctx.write_list(&datasets.items).await
}

pub async fn list_installations(
    args: ListExampleInstallations,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.scope.deployment_id())?;
    let deployment = select_deployment(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    let installations = ctx
        .api_client
        .0
        .list_example_dataset_installations(ListExampleDatasetInstallationsRequest {
            deployment_id: deployment.id,
            options: Some(ListOptions::default()),
        })
        .await?;
    ctx.write_list(&installations.items).await
}

pub async fn get_installation(
    args: ExampleInstallation,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = req_option(
        "installation-id",
        args.id.as_deref(),
        args.installation_id.as_deref(),
    )?;
    let installation = ctx
        .api_client
        .0
        .get_example_dataset_installation(id)
        .await?;
    ctx.write_item(&installation).await
}

pub async fn create_installation(
    args: CreateExampleInstallation,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let dataset_id = req_option(
        "example-dataset-id",
        args.dataset_arg.as_deref(),
        args.example_dataset_id.as_deref(),
    )?;
    let dataset = ctx.api_client.0.get_example_dataset(dataset_id).await?;
    let deployment = select_deployment(
        &ctx.api_client,
        args.scope.deployment_id(),
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    let installation = ctx
        .api_client
        .0
        .create_example_dataset_installation(ExampleDatasetInstallation {
            deployment_id: deployment.id,
            exampledataset_id: dataset.id,
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&installation).await
}

pub async fn delete_installation(
    args: ExampleInstallation,
    ctx: &mut RuntimeContext,
) -> OasisCliResult<()> {
    let id = req_option(
        "installation-id",
        args.id.as_deref(),
        args.installation_id.as_deref(),
    )?;
    ctx.api_client
        .0
        .delete_example_dataset_installation(id)
        .await?;
    ctx.write_success().await
}

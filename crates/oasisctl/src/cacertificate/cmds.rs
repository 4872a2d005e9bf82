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
use rpc::protos::crypto::CaCertificate;

use super::args::{
    CreateCaCertificate, DeleteCaCertificate, GetCaCertificate, ListCaCertificates,
    UpdateCaCertificate,
};
use crate::cfg::args::{apply_change, opt_option, req_option};
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::selection::{select_ca_certificate, select_project};

impl Render for CaCertificate {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "Default",
        "Url",
        "Created At",
        "Expires At",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            fmt_flag(self.is_default),
            self.url.clone(),
            fmt_time(&self.created_at),
            fmt_time(&self.expires_at),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut details: Vec<_> = Self::COLUMNS.iter().copied().zip(self.cells()).collect();
        details.push(("Certificate", self.certificate_pem.trim_end().to_string()));
        details
    }
}

pub async fn get(args: GetCaCertificate, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.cacertificate_id.as_deref())?;
    let certificate = select_ca_certificate(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.write_item(&certificate).await
}

pub async fn list(args: ListCaCertificates, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let project_id = opt_option(args.id.as_deref(), args.scope.project_id())?;
    let project =
        select_project(&ctx.api_client, project_id, args.scope.organization_id()).await?;
    let certificates = ctx
        .api_client
        .0
        .list_ca_certificates(ListOptions::in_context(project.id))
        .await?;
    ctx.write_list(&certificates.items).await
}

pub async fn create(args: CreateCaCertificate, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let name = req_option("name", args.name_arg.as_deref(), args.name.as_deref())?;
    let project = select_project(
        &ctx.api_client,
        args.scope.project_id(),
        args.scope.organization_id(),
    )
    .await?;
    let certificate = ctx
        .api_client
        .0
        .create_ca_certificate(CaCertificate {
            project_id: project.id,
            name: name.to_string(),
            description: args.description.unwrap_or_default(),
            ..Default::default()
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&certificate).await
}

pub async fn update(args: UpdateCaCertificate, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.cacertificate_id.as_deref())?;
    let mut certificate = select_ca_certificate(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;

    let mut changed = apply_change(&mut certificate.name, args.name);
    changed |= apply_change(&mut certificate.description, args.description);
    if !changed && !args.set_default {
        return ctx.write_message("No changes").await;
    }

    if changed {
        certificate = ctx
            .api_client
            .0
            .update_ca_certificate(certificate)
            .await?;
    }
    if args.set_default && !certificate.is_default {
        ctx.api_client
            .0
            .set_default_ca_certificate(certificate.clone())
            .await?;
        certificate = ctx
            .api_client
            .0
            .get_ca_certificate(certificate.id.as_str())
            .await?;
    }
    ctx.write_success().await?;
    ctx.write_item(&certificate).await
}

pub async fn delete(args: DeleteCaCertificate, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = opt_option(args.id.as_deref(), args.cacertificate_id.as_deref())?;
    let certificate = select_ca_certificate(
        &ctx.api_client,
        id,
        args.scope.organization_id(),
        args.scope.project_id(),
    )
    .await?;
    ctx.api_client
        .0
        .delete_ca_certificate(certificate.id.as_str())
        .await?;
    ctx.write_success().await
}

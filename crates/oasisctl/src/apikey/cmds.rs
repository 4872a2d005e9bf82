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
use rpc::protos::iam::{ApiKey, ApiKeySecret, CreateApiKeyRequest};

use super::args::{CreateApiKey, DeleteApiKey, ListApiKeys};
use crate::cfg::args::req_option;
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_flag, fmt_time};
use crate::selection::organization_filter;

impl Render for ApiKey {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Organization",
        "Readonly",
        "Created At",
        "Expires At",
        "Expired",
        "Revoked",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.organization_id.clone(),
            fmt_flag(self.is_readonly),
            fmt_time(&self.created_at),
            fmt_time(&self.expires_at),
            fmt_flag(self.is_expired),
            fmt_flag(self.is_revoked),
        ]
    }
}

impl Render for ApiKeySecret {
    const COLUMNS: &'static [&'static str] = &["Id", "Secret"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.clone(), self.secret.clone()]
    }
}

pub async fn list(_args: ListApiKeys, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let keys = ctx
        .api_client
        .0
        .list_api_keys(ListOptions::default())
        .await?;
    ctx.write_list(&keys.items).await
}

pub async fn create(args: CreateApiKey, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let organization_id =
        organization_filter(&ctx.api_client, args.organization_id.as_deref()).await?;
    let secret = ctx
        .api_client
        .0
        .create_api_key(CreateApiKeyRequest {
            organization_id,
            readonly: args.readonly,
        })
        .await?;
    ctx.write_success().await?;
    ctx.write_item(&secret).await
}

pub async fn delete(args: DeleteApiKey, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let id = req_option("apikey-id", args.id.as_deref(), args.apikey_id.as_deref())?;
    ctx.api_client.0.delete_api_key(id).await?;
    ctx.write_success().await
}

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
use serde::Serialize;

use super::args::{EffectivePermissions, ListPermissions};
use crate::cfg::args::req_option;
use crate::cfg::runtime::RuntimeContext;
use crate::output::Render;

#[derive(Serialize)]
#[serde(transparent)]
pub struct Permission(pub String);

impl Render for Permission {
    const COLUMNS: &'static [&'static str] = &["Permission"];

    fn cells(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

pub async fn list(_args: ListPermissions, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let permissions = ctx
        .api_client
        .0
        .list_permissions(ListOptions::default())
        .await?;
    let rows: Vec<_> = permissions.items.into_iter().map(Permission).collect();
    ctx.write_list(&rows).await
}

pub async fn effective(args: EffectivePermissions, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let url = req_option("url", args.url_arg.as_deref(), args.url.as_deref())?;
    let permissions = ctx.api_client.0.get_effective_permissions(url).await?;
    let rows: Vec<_> = permissions.items.into_iter().map(Permission).collect();
    ctx.write_list(&rows).await
}

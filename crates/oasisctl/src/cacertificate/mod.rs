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

pub mod args;
pub mod cmds;


use rpc::cli::OasisCliResult;
pub use args::{
    CreateCaCertificate, DeleteCaCertificate, GetCaCertificate, ListCaCertificates,
    UpdateCaCertificate,
};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for GetCaCertificate {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::get(self, &mut ctx).await
    }
}

impl Dispatch for ListCaCertificates {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::list(self, &mut ctx).await
    }
}

impl Dispatch for CreateCaCertificate {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::create(self, &mut ctx).await
    }
}

impl Dispatch for UpdateCaCertificate {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::update(self, &mut ctx).await
    }
}

impl Dispatch for DeleteCaCertificate {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::delete(self, &mut ctx).await
    }
}

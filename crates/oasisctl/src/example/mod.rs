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

#[cfg(test)]
mod tests;

use rpc::cli::OasisCliResult;
pub use args::{CreateExampleCmd, DeleteExampleCmd, GetExampleCmd, ListExampleCmd};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for ListExampleCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            ListExampleCmd::Datasets(args) => cmds::list_datasets(args, &mut ctx).await,
            ListExampleCmd::Installations(args) => {
                cmds::list_installations(args, &mut ctx).await
            }
        }
    }
}

impl Dispatch for GetExampleCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            GetExampleCmd::Installation(args) => cmds::get_installation(args, &mut ctx).await,
        }
    }
}

impl Dispatch for CreateExampleCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            CreateExampleCmd::Installation(args) => {
                cmds::create_installation(args, &mut ctx).await
            }
        }
    }
}

impl Dispatch for DeleteExampleCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            DeleteExampleCmd::Installation(args) => {
                cmds::delete_installation(args, &mut ctx).await
            }
        }
    }
}

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
pub use args::{
    AddGroupCmd, CreateGroup, DeleteGroup, GetGroup, ListGroupCmd, ListGroups, UpdateGroup,
};

use self::args::DeleteGroupCmd;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for GetGroup {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::get(self, &mut ctx).await
    }
}

impl Dispatch for ListGroups {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::list(self, &mut ctx).await
    }
}

impl Dispatch for ListGroupCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            ListGroupCmd::Members(args) => cmds::list_members(args, &mut ctx).await,
        }
    }
}

impl Dispatch for CreateGroup {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::create(self, &mut ctx).await
    }
}

impl Dispatch for UpdateGroup {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::update(self, &mut ctx).await
    }
}

impl Dispatch for DeleteGroup {
    async fn dispatch(mut self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self.command.take() {
            Some(DeleteGroupCmd::Members(args)) => cmds::delete_members(args, &mut ctx).await,
            None => cmds::delete(self, &mut ctx).await,
        }
    }
}

impl Dispatch for AddGroupCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            AddGroupCmd::Members(args) => cmds::add_members(args, &mut ctx).await,
        }
    }
}

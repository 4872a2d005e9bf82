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
    AcceptOrganizationCmd, CreateOrganization, DeleteOrganization, GetOrganization,
    ListOrganizationCmd, ListOrganizations, RejectOrganizationCmd, UpdateOrganization,
};

use self::args::{CreateOrganizationCmd, DeleteOrganizationCmd, GetOrganizationCmd};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for GetOrganization {
    async fn dispatch(mut self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self.command.take() {
            Some(GetOrganizationCmd::Invite(args)) => cmds::get_invite(args, &mut ctx).await,
            None => cmds::get(self, &mut ctx).await,
        }
    }
}

impl Dispatch for ListOrganizations {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::list(self, &mut ctx).await
    }
}

impl Dispatch for ListOrganizationCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            ListOrganizationCmd::Invites(args) => cmds::list_invites(args, &mut ctx).await,
            ListOrganizationCmd::Members(args) => cmds::list_members(args, &mut ctx).await,
        }
    }
}

impl Dispatch for CreateOrganization {
    async fn dispatch(mut self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self.command.take() {
            Some(CreateOrganizationCmd::Invite(args)) => {
                cmds::create_invite(args, &mut ctx).await
            }
            None => cmds::create(self, &mut ctx).await,
        }
    }
}

impl Dispatch for UpdateOrganization {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::update(self, &mut ctx).await
    }
}

impl Dispatch for DeleteOrganization {
    async fn dispatch(mut self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self.command.take() {
            Some(DeleteOrganizationCmd::Invite(args)) => {
                cmds::delete_invite(args, &mut ctx).await
            }
            Some(DeleteOrganizationCmd::Members(args)) => {
                cmds::delete_members(args, &mut ctx).await
            }
            None => cmds::delete(self, &mut ctx).await,
        }
    }
}

impl Dispatch for AcceptOrganizationCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            AcceptOrganizationCmd::Invite(args) => cmds::accept_invite(args, &mut ctx).await,
        }
    }
}

impl Dispatch for RejectOrganizationCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            RejectOrganizationCmd::Invite(args) => cmds::reject_invite(args, &mut ctx).await,
        }
    }
}

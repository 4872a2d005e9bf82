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
pub use args::{GetPolicy, UpdatePolicyCmd};

use self::args::{AddPolicyCmd, DeletePolicyCmd};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for GetPolicy {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        cmds::get(self, &mut ctx).await
    }
}

impl Dispatch for UpdatePolicyCmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            UpdatePolicyCmd::Add(AddPolicyCmd::Binding(args)) => {
                cmds::add_binding(args, &mut ctx).await
            }
            UpdatePolicyCmd::Delete(DeletePolicyCmd::Binding(args)) => {
                cmds::delete_binding(args, &mut ctx).await
            }
        }
    }
}

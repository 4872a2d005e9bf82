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

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct GetPolicy {
    #[clap(value_name = "URL", help = "URL of the resource to get the policy for")]
    pub url_arg: Option<String>,

    #[clap(
        short = 'u',
        long,
        env = "OASIS_URL",
        help = "URL of the resource to get the policy for"
    )]
    pub url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UpdatePolicyCmd {
    #[clap(subcommand, about = "Add to a policy")]
    Add(AddPolicyCmd),

    #[clap(subcommand, about = "Delete from a policy")]
    Delete(DeletePolicyCmd),
}

#[derive(Subcommand, Debug)]
pub enum AddPolicyCmd {
    #[clap(about = "Add a role binding to a policy")]
    Binding(PolicyBinding),
}

#[derive(Subcommand, Debug)]
pub enum DeletePolicyCmd {
    #[clap(about = "Delete a role binding from a policy")]
    Binding(PolicyBinding),
}

#[derive(Parser, Debug)]
pub struct PolicyBinding {
    #[clap(value_name = "URL", help = "URL of the resource to update the policy for")]
    pub url_arg: Option<String>,

    #[clap(
        short = 'u',
        long,
        env = "OASIS_URL",
        help = "URL of the resource to update the policy for"
    )]
    pub url: Option<String>,

    #[clap(short = 'r', long, env = "OASIS_ROLE", help = "Identifier of the role to bind")]
    pub role_id: Option<String>,

    #[clap(long = "user-id", value_delimiter = ',', help = "Identifiers of the users to bind")]
    pub user_ids: Vec<String>,

    #[clap(long = "group-id", value_delimiter = ',', help = "Identifiers of the groups to bind")]
    pub group_ids: Vec<String>,
}

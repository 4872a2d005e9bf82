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

use crate::cfg::args::OrganizationScope;

#[derive(Parser, Debug)]
pub struct GetGroup {
    #[clap(value_name = "GROUP", help = "Identifier, name or URL of the group")]
    pub id: Option<String>,

    #[clap(
        short = 'g',
        long,
        env = "OASIS_GROUP",
        help = "Identifier, name or URL of the group"
    )]
    pub group_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListGroups {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Subcommand, Debug)]
pub enum ListGroupCmd {
    #[clap(about = "List members of a group the authenticated user has access to")]
    Members(GetGroup),
}

#[derive(Parser, Debug)]
pub struct CreateGroup {
    #[clap(value_name = "NAME", help = "Name of the group")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the group")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the group")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct UpdateGroup {
    #[clap(value_name = "GROUP", help = "Identifier, name or URL of the group")]
    pub id: Option<String>,

    #[clap(
        short = 'g',
        long,
        env = "OASIS_GROUP",
        help = "Identifier, name or URL of the group"
    )]
    pub group_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(long, help = "New name of the group")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the group")]
    pub description: Option<String>,
}

#[derive(Parser, Debug)]
#[clap(args_conflicts_with_subcommands = true)]
pub struct DeleteGroup {
    #[clap(value_name = "GROUP", help = "Identifier, name or URL of the group")]
    pub id: Option<String>,

    #[clap(
        short = 'g',
        long,
        env = "OASIS_GROUP",
        help = "Identifier, name or URL of the group"
    )]
    pub group_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(subcommand)]
    pub command: Option<DeleteGroupCmd>,
}

#[derive(Subcommand, Debug)]
pub enum DeleteGroupCmd {
    #[clap(about = "Delete members from a group")]
    Members(GroupMembers),
}

#[derive(Subcommand, Debug)]
pub enum AddGroupCmd {
    #[clap(about = "Add members to a group")]
    Members(GroupMembers),
}

#[derive(Parser, Debug)]
pub struct GroupMembers {
    #[clap(value_name = "GROUP", help = "Identifier, name or URL of the group")]
    pub id: Option<String>,

    #[clap(
        short = 'g',
        long,
        env = "OASIS_GROUP",
        help = "Identifier, name or URL of the group"
    )]
    pub group_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(
        short = 'u',
        long,
        required = true,
        value_delimiter = ',',
        help = "Email addresses of the users"
    )]
    pub user_emails: Vec<String>,
}

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
#[clap(args_conflicts_with_subcommands = true)]
pub struct GetOrganization {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(subcommand)]
    pub command: Option<GetOrganizationCmd>,
}

#[derive(Subcommand, Debug)]
pub enum GetOrganizationCmd {
    #[clap(about = "Get an organization invite the authenticated user has access to")]
    Invite(GetOrganizationInvite),
}

#[derive(Parser, Debug)]
pub struct GetOrganizationInvite {
    #[clap(value_name = "INVITE", help = "Identifier or email address of the invite")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_ORGANIZATION_INVITE",
        help = "Identifier or email address of the invite"
    )]
    pub invite_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListOrganizations {}

#[derive(Subcommand, Debug)]
pub enum ListOrganizationCmd {
    #[clap(about = "List invites of an organization the authenticated user has access to")]
    Invites(ListOrganizationInvites),

    #[clap(about = "List members of an organization the authenticated user is a member of")]
    Members(ListOrganizationMembers),
}

#[derive(Parser, Debug)]
pub struct ListOrganizationInvites {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListOrganizationMembers {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
#[clap(args_conflicts_with_subcommands = true)]
pub struct CreateOrganization {
    #[clap(value_name = "NAME", help = "Name of the organization")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the organization")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the organization")]
    pub description: Option<String>,

    #[clap(subcommand)]
    pub command: Option<CreateOrganizationCmd>,
}

#[derive(Subcommand, Debug)]
pub enum CreateOrganizationCmd {
    #[clap(about = "Invite a person to join an organization")]
    Invite(CreateOrganizationInvite),
}

#[derive(Parser, Debug)]
pub struct CreateOrganizationInvite {
    #[clap(value_name = "EMAIL", help = "Email address of the person to invite")]
    pub email_arg: Option<String>,

    #[clap(long, help = "Email address of the person to invite")]
    pub email: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct UpdateOrganization {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(long, help = "New name of the organization")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the organization")]
    pub description: Option<String>,
}

#[derive(Parser, Debug)]
#[clap(args_conflicts_with_subcommands = true)]
pub struct DeleteOrganization {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(subcommand)]
    pub command: Option<DeleteOrganizationCmd>,
}

#[derive(Subcommand, Debug)]
pub enum DeleteOrganizationCmd {
    #[clap(about = "Delete an organization invite the authenticated user has access to")]
    Invite(DeleteOrganizationInvite),

    #[clap(about = "Delete members from an organization")]
    Members(DeleteOrganizationMembers),
}

#[derive(Parser, Debug)]
pub struct DeleteOrganizationInvite {
    #[clap(value_name = "INVITE", help = "Identifier or email address of the invite")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_ORGANIZATION_INVITE",
        help = "Identifier or email address of the invite"
    )]
    pub invite_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct DeleteOrganizationMembers {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(
        short = 'u',
        long,
        required = true,
        value_delimiter = ',',
        help = "Email addresses of the members to delete"
    )]
    pub user_emails: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum AcceptOrganizationCmd {
    #[clap(about = "Accept an organization invite addressed to the authenticated user")]
    Invite(OrganizationInviteResponse),
}

#[derive(Subcommand, Debug)]
pub enum RejectOrganizationCmd {
    #[clap(about = "Reject an organization invite addressed to the authenticated user")]
    Invite(OrganizationInviteResponse),
}

#[derive(Parser, Debug)]
pub struct OrganizationInviteResponse {
    #[clap(value_name = "INVITE", help = "Identifier or email address of the invite")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_ORGANIZATION_INVITE",
        help = "Identifier or email address of the invite"
    )]
    pub invite_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

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

use clap::Parser;

use crate::cfg::args::OrganizationScope;

#[derive(Parser, Debug)]
pub struct GetRole {
    #[clap(value_name = "ROLE", help = "Identifier, name or URL of the role")]
    pub id: Option<String>,

    #[clap(
        short = 'r',
        long,
        env = "OASIS_ROLE",
        help = "Identifier, name or URL of the role"
    )]
    pub role_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListRoles {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct CreateRole {
    #[clap(value_name = "NAME", help = "Name of the role")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the role")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the role")]
    pub description: Option<String>,

    #[clap(long = "permission", value_name = "PERMISSION", help = "Permission granted by the role")]
    pub permissions: Vec<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct UpdateRole {
    #[clap(value_name = "ROLE", help = "Identifier, name or URL of the role")]
    pub id: Option<String>,

    #[clap(
        short = 'r',
        long,
        env = "OASIS_ROLE",
        help = "Identifier, name or URL of the role"
    )]
    pub role_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,

    #[clap(long, help = "New name of the role")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the role")]
    pub description: Option<String>,

    #[clap(
        long = "add-permission",
        value_name = "PERMISSION",
        help = "Permission to add to the role"
    )]
    pub add_permissions: Vec<String>,

    #[clap(
        long = "remove-permission",
        value_name = "PERMISSION",
        help = "Permission to remove from the role"
    )]
    pub remove_permissions: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteRole {
    #[clap(value_name = "ROLE", help = "Identifier, name or URL of the role")]
    pub id: Option<String>,

    #[clap(
        short = 'r',
        long,
        env = "OASIS_ROLE",
        help = "Identifier, name or URL of the role"
    )]
    pub role_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

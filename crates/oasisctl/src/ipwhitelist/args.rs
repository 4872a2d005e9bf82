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

use crate::cfg::args::ProjectScope;

#[derive(Parser, Debug)]
pub struct GetIpWhitelist {
    #[clap(value_name = "IPWHITELIST", help = "Identifier, name or URL of the IP whitelist")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_IPWHITELIST",
        help = "Identifier, name or URL of the IP whitelist"
    )]
    pub ipwhitelist_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct ListIpWhitelists {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct CreateIpWhitelist {
    #[clap(value_name = "NAME", help = "Name of the IP whitelist")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the IP whitelist")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the IP whitelist")]
    pub description: Option<String>,

    #[clap(
        long = "cidr-range",
        value_name = "CIDR",
        value_delimiter = ',',
        help = "CIDR range allowed to connect, e.g. 10.0.0.0/8"
    )]
    pub cidr_ranges: Vec<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct UpdateIpWhitelist {
    #[clap(value_name = "IPWHITELIST", help = "Identifier, name or URL of the IP whitelist")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_IPWHITELIST",
        help = "Identifier, name or URL of the IP whitelist"
    )]
    pub ipwhitelist_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,

    #[clap(long, help = "New name of the IP whitelist")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the IP whitelist")]
    pub description: Option<String>,

    #[clap(
        long = "add-cidr-range",
        value_name = "CIDR",
        value_delimiter = ',',
        help = "CIDR range to add to the whitelist"
    )]
    pub add_cidr_ranges: Vec<String>,

    #[clap(
        long = "remove-cidr-range",
        value_name = "CIDR",
        value_delimiter = ',',
        help = "CIDR range to remove from the whitelist"
    )]
    pub remove_cidr_ranges: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteIpWhitelist {
    #[clap(value_name = "IPWHITELIST", help = "Identifier, name or URL of the IP whitelist")]
    pub id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_IPWHITELIST",
        help = "Identifier, name or URL of the IP whitelist"
    )]
    pub ipwhitelist_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

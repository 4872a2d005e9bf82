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

use crate::cfg::args::{DeploymentScope, ProjectScope};

#[derive(Parser, Debug)]
pub struct GetDeployment {
    #[clap(value_name = "DEPLOYMENT", help = "Identifier, name or URL of the deployment")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

#[derive(Parser, Debug)]
pub struct ListDeployments {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct CreateDeployment {
    #[clap(value_name = "NAME", help = "Name of the deployment")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the deployment")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the deployment")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,

    #[clap(
        short = 'r',
        long,
        env = "OASIS_REGION",
        help = "Identifier of the region to create the deployment in"
    )]
    pub region_id: Option<String>,

    #[clap(
        short = 'c',
        long,
        env = "OASIS_CACERTIFICATE",
        help = "Identifier, name or URL of the CA certificate to use for the deployment"
    )]
    pub cacertificate_id: Option<String>,

    #[clap(
        short = 'i',
        long,
        env = "OASIS_IPWHITELIST",
        help = "Identifier of the IP whitelist to use for the deployment"
    )]
    pub ipwhitelist_id: Option<String>,

    #[clap(long, help = "Version of ArangoDB to use for the deployment")]
    pub version: Option<String>,

    #[clap(long, help = "Servers preset to use for the deployment")]
    pub servers_preset: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UpdateDeployment {
    #[clap(value_name = "DEPLOYMENT", help = "Identifier, name or URL of the deployment")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,

    #[clap(long, help = "New name of the deployment")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the deployment")]
    pub description: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteDeployment {
    #[clap(value_name = "DEPLOYMENT", help = "Identifier, name or URL of the deployment")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

#[derive(Parser, Debug)]
pub struct ListServersSpecPresets {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,

    #[clap(
        short = 'r',
        long,
        env = "OASIS_REGION",
        help = "Identifier of the region to list presets for"
    )]
    pub region_id: Option<String>,
}

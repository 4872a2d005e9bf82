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
pub struct GetCaCertificate {
    #[clap(value_name = "CACERTIFICATE", help = "Identifier, name or URL of the CA certificate")]
    pub id: Option<String>,

    #[clap(
        short = 'c',
        long,
        env = "OASIS_CACERTIFICATE",
        help = "Identifier, name or URL of the CA certificate"
    )]
    pub cacertificate_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct ListCaCertificates {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct CreateCaCertificate {
    #[clap(value_name = "NAME", help = "Name of the CA certificate")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the CA certificate")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the CA certificate")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct UpdateCaCertificate {
    #[clap(value_name = "CACERTIFICATE", help = "Identifier, name or URL of the CA certificate")]
    pub id: Option<String>,

    #[clap(
        short = 'c',
        long,
        env = "OASIS_CACERTIFICATE",
        help = "Identifier, name or URL of the CA certificate"
    )]
    pub cacertificate_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,

    #[clap(long, help = "New name of the CA certificate")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the CA certificate")]
    pub description: Option<String>,

    #[clap(long, help = "Make this the default CA certificate of its project")]
    pub set_default: bool,
}

#[derive(Parser, Debug)]
pub struct DeleteCaCertificate {
    #[clap(value_name = "CACERTIFICATE", help = "Identifier, name or URL of the CA certificate")]
    pub id: Option<String>,

    #[clap(
        short = 'c',
        long,
        env = "OASIS_CACERTIFICATE",
        help = "Identifier, name or URL of the CA certificate"
    )]
    pub cacertificate_id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

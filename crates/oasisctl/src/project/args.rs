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

use crate::cfg::args::{OrganizationScope, ProjectScope};

#[derive(Parser, Debug)]
pub struct GetProject {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

#[derive(Parser, Debug)]
pub struct ListProjects {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct CreateProject {
    #[clap(value_name = "NAME", help = "Name of the project")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the project")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the project")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct UpdateProject {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,

    #[clap(long, help = "New name of the project")]
    pub name: Option<String>,

    #[clap(long, help = "New description of the project")]
    pub description: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteProject {
    #[clap(value_name = "PROJECT", help = "Identifier, name or URL of the project")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: ProjectScope,
}

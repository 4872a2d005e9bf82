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

use crate::cfg::args::{DeploymentScope, OrganizationScope};

#[derive(Subcommand, Debug)]
pub enum ListExampleCmd {
    #[clap(about = "List all example datasets")]
    Datasets(ListExampleDatasets),

    #[clap(about = "List all example dataset installations of a deployment")]
    Installations(ListExampleInstallations),
}

#[derive(Parser, Debug)]
pub struct ListExampleDatasets {
    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListExampleInstallations {
    #[clap(value_name = "DEPLOYMENT", help = "Identifier, name or URL of the deployment")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

#[derive(Subcommand, Debug)]
pub enum GetExampleCmd {
    #[clap(about = "Get an example dataset installation")]
    Installation(ExampleInstallation),
}

#[derive(Subcommand, Debug)]
pub enum DeleteExampleCmd {
    #[clap(about = "Delete an example dataset installation")]
    Installation(ExampleInstallation),
}

#[derive(Parser, Debug)]
pub struct ExampleInstallation {
    #[clap(value_name = "INSTALLATION", help = "Identifier of the installation")]
    pub id: Option<String>,

    #[clap(long, help = "Identifier of the installation")]
    pub installation_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CreateExampleCmd {
    #[clap(about = "Install an example dataset into a deployment")]
    Installation(CreateExampleInstallation),
}

#[derive(Parser, Debug)]
pub struct CreateExampleInstallation {
    #[clap(value_name = "DATASET", help = "Identifier of the example dataset")]
    pub dataset_arg: Option<String>,

    #[clap(long, help = "Identifier of the example dataset")]
    pub example_dataset_id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

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
pub struct GetProvider {
    #[clap(value_name = "PROVIDER", help = "Identifier or name of the provider")]
    pub id: Option<String>,

    #[clap(long, env = "OASIS_PROVIDER", help = "Identifier or name of the provider")]
    pub provider_id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

#[derive(Parser, Debug)]
pub struct ListProviders {
    #[clap(value_name = "ORGANIZATION", help = "Identifier, name or URL of the organization")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: OrganizationScope,
}

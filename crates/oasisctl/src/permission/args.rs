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
pub struct ListPermissions {}

#[derive(Subcommand, Debug)]
pub enum GetEffectiveCmd {
    #[clap(about = "Get the effective permissions the authenticated user has on a resource")]
    Permissions(EffectivePermissions),
}

#[derive(Parser, Debug)]
pub struct EffectivePermissions {
    #[clap(value_name = "URL", help = "URL of the resource to get effective permissions for")]
    pub url_arg: Option<String>,

    #[clap(
        short = 'u',
        long,
        env = "OASIS_URL",
        help = "URL of the resource to get effective permissions for"
    )]
    pub url: Option<String>,
}

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

#[derive(Parser, Debug)]
pub struct ListApiKeys {}

#[derive(Parser, Debug)]
pub struct CreateApiKey {
    #[clap(long, help = "Grant readonly access only")]
    pub readonly: bool,

    #[clap(
        short = 'o',
        long,
        help = "Identifier, name or URL of the only organization the key grants access to"
    )]
    pub organization_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteApiKey {
    #[clap(value_name = "APIKEY", help = "Identifier of the API key")]
    pub id: Option<String>,

    #[clap(short = 'i', long, help = "Identifier of the API key")]
    pub apikey_id: Option<String>,
}

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

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(about = "Generate Markdown documentation for every command")]
pub struct Opts {
    #[clap(
        short,
        long,
        default_value = "./docs",
        help = "Output directory, which must exist"
    )]
    pub output_dir: PathBuf,

    #[clap(
        short,
        long,
        default_value = "",
        help = "File extension the links should point to (default .md)"
    )]
    pub link_file_ext: String,

    #[clap(
        short,
        long,
        default_value = "",
        help = "Replace the underscore in links with the given character"
    )]
    pub replace_underscore_with: String,
}

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

use std::io;

use clap::CommandFactory;
use clap_complete::shells;
use rpc::cli::OasisCliResult;

use super::args::Shell;
use crate::cfg::cli_options::CliOptions;

const BIN_NAME: &str = "oasisctl";

pub fn generate(shell: Shell, out: &mut dyn io::Write) -> OasisCliResult<()> {
    let mut cmd = CliOptions::command();
    match shell {
        Shell::Bash => clap_complete::generate(shells::Bash, &mut cmd, BIN_NAME, out),
        Shell::Fish => clap_complete::generate(shells::Fish, &mut cmd, BIN_NAME, out),
        Shell::Zsh => clap_complete::generate(shells::Zsh, &mut cmd, BIN_NAME, out),
    }
    Ok(())
}

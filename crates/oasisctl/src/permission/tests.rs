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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Rendering         - Permissions print as plain strings.

use clap::{CommandFactory, Parser};
use rpc::cli::OutputFormat;

use super::args::*;
use super::cmds::Permission;
use crate::output::render_list;

#[derive(Parser, Debug)]
struct GetCmd {
    #[clap(subcommand)]
    cmd: GetEffectiveCmd,
}

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    ListPermissions::command().debug_assert();
    GetCmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_effective_permissions ensures the resource URL is accepted
// as a flag.
#[test]
fn parse_effective_permissions() {
    let cmd = GetCmd::try_parse_from(["effective", "permissions", "-u", "/Organization/o1"])
        .expect("should parse effective permissions");

    let GetEffectiveCmd::Permissions(args) = cmd.cmd;
    assert_eq!(args.url.as_deref(), Some("/Organization/o1"));
}

/////////////////////////////////////////////////////////////////////////////
// Rendering

// render_permissions_as_strings keeps JSON output a flat array.
#[test]
fn render_permissions_as_strings() {
    let rows = vec![
        Permission("data.deployment.get".to_string()),
        Permission("data.deployment.list".to_string()),
    ];

    let json = render_list(&rows, OutputFormat::Json).expect("renders");
    let parsed: Vec<String> = serde_json::from_str(&json).expect("string array");

    assert_eq!(parsed, vec!["data.deployment.get", "data.deployment.list"]);
}

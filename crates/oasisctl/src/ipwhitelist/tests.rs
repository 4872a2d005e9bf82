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
// Rendering         - CIDR ranges in table output.

use clap::{CommandFactory, Parser};
use rpc::cli::OutputFormat;
use rpc::protos::security::IpWhitelist;

use super::args::*;
use crate::output::render_list;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetIpWhitelist::command().debug_assert();
    ListIpWhitelists::command().debug_assert();
    CreateIpWhitelist::command().debug_assert();
    UpdateIpWhitelist::command().debug_assert();
    DeleteIpWhitelist::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_create_cidr_ranges ensures ranges can be repeated and comma
// separated.
#[test]
fn parse_create_cidr_ranges() {
    let cmd = CreateIpWhitelist::try_parse_from([
        "ipwhitelist",
        "office",
        "--cidr-range",
        "10.0.0.0/8,192.168.0.0/16",
        "--cidr-range",
        "172.16.0.0/12",
    ])
    .expect("should parse create");

    assert_eq!(
        cmd.cidr_ranges,
        vec!["10.0.0.0/8", "192.168.0.0/16", "172.16.0.0/12"]
    );
}

// parse_update_ranges ensures add and remove ranges are kept apart.
#[test]
fn parse_update_ranges() {
    let cmd = UpdateIpWhitelist::try_parse_from([
        "ipwhitelist",
        "-i",
        "office",
        "--add-cidr-range",
        "1.2.3.4/32",
        "--remove-cidr-range",
        "10.0.0.0/8",
    ])
    .expect("should parse update");

    assert_eq!(cmd.ipwhitelist_id.as_deref(), Some("office"));
    assert_eq!(cmd.add_cidr_ranges, vec!["1.2.3.4/32"]);
    assert_eq!(cmd.remove_cidr_ranges, vec!["10.0.0.0/8"]);
}

// parse_list_positional_project ensures the project of list
// ipwhitelists can be named positionally.
#[test]
fn parse_list_positional_project() {
    let cmd = ListIpWhitelists::try_parse_from(["ipwhitelists", "my-project"])
        .expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("my-project"));
    assert_eq!(cmd.scope.project_id(), None);
}

/////////////////////////////////////////////////////////////////////////////
// Rendering

// render_joins_cidr_ranges prints all ranges in one cell.
#[test]
fn render_joins_cidr_ranges() {
    let whitelist = IpWhitelist {
        id: "ip1".to_string(),
        name: "office".to_string(),
        cidr_ranges: vec!["10.0.0.0/8".to_string(), "1.2.3.4/32".to_string()],
        ..Default::default()
    };

    let rendered = render_list(&[whitelist], OutputFormat::Table).expect("renders");

    assert!(rendered.contains("10.0.0.0/8, 1.2.3.4/32"));
}

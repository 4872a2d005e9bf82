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
// Role Bindings     - Member identifiers of requested bindings.

use clap::{CommandFactory, Parser};

use super::args::*;
use super::cmds::role_bindings;

#[derive(Parser, Debug)]
struct UpdateCmd {
    #[clap(subcommand)]
    cmd: UpdatePolicyCmd,
}

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetPolicy::command().debug_assert();
    UpdateCmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_add_binding ensures update policy add binding takes users
// and groups.
#[test]
fn parse_add_binding() {
    let cmd = UpdateCmd::try_parse_from([
        "policy",
        "add",
        "binding",
        "--url",
        "/Organization/o1",
        "--role-id",
        "admin",
        "--user-id",
        "u1,u2",
        "--group-id",
        "g1",
    ])
    .expect("should parse add binding");

    match cmd.cmd {
        UpdatePolicyCmd::Add(AddPolicyCmd::Binding(args)) => {
            assert_eq!(args.url.as_deref(), Some("/Organization/o1"));
            assert_eq!(args.role_id.as_deref(), Some("admin"));
            assert_eq!(args.user_ids, vec!["u1", "u2"]);
            assert_eq!(args.group_ids, vec!["g1"]);
        }
        _ => panic!("expected add binding"),
    }
}

// parse_delete_binding_positional_url ensures the resource URL can be
// given positionally.
#[test]
fn parse_delete_binding_positional_url() {
    let cmd = UpdateCmd::try_parse_from([
        "policy",
        "delete",
        "binding",
        "/Project/p1",
        "-r",
        "viewer",
        "--group-id",
        "g1",
    ])
    .expect("should parse delete binding");

    match cmd.cmd {
        UpdatePolicyCmd::Delete(DeletePolicyCmd::Binding(args)) => {
            assert_eq!(args.url_arg.as_deref(), Some("/Project/p1"));
        }
        _ => panic!("expected delete binding"),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Role Bindings

// role_bindings_prefix_member_ids marks users and groups.
#[test]
fn role_bindings_prefix_member_ids() {
    let request = role_bindings(
        "/Organization/o1",
        "admin",
        &["u1".to_string()],
        &["g1".to_string()],
    )
    .expect("members given");

    assert_eq!(request.resource_url, "/Organization/o1");
    let members: Vec<_> = request
        .bindings
        .iter()
        .map(|b| (b.member_id.as_str(), b.role_id.as_str()))
        .collect();
    assert_eq!(members, vec![("user-u1", "admin"), ("group-g1", "admin")]);
}

// role_bindings_require_a_member fails without users and groups.
#[test]
fn role_bindings_require_a_member() {
    let err = role_bindings("/Organization/o1", "admin", &[], &[]).expect_err("no members");

    assert!(err.to_string().contains("--user-id or --group-id"));
}

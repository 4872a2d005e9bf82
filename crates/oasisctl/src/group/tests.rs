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

use clap::{CommandFactory, Parser};

use super::args::*;

#[derive(Parser, Debug)]
struct AddCmd {
    #[clap(subcommand)]
    cmd: AddGroupCmd,
}

#[derive(Parser, Debug)]
struct ListCmd {
    #[clap(subcommand)]
    cmd: ListGroupCmd,
}

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetGroup::command().debug_assert();
    ListGroups::command().debug_assert();
    CreateGroup::command().debug_assert();
    UpdateGroup::command().debug_assert();
    DeleteGroup::command().debug_assert();
    AddCmd::command().debug_assert();
    ListCmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_group_flag ensures the group can be given with -g.
#[test]
fn parse_get_group_flag() {
    let cmd = GetGroup::try_parse_from(["group", "-g", "admins"]).expect("should parse get");

    assert!(cmd.id.is_none());
    assert_eq!(cmd.group_id.as_deref(), Some("admins"));
}

// parse_add_members ensures add group members takes the group and
// a list of emails.
#[test]
fn parse_add_members() {
    let cmd = AddCmd::try_parse_from([
        "group",
        "members",
        "admins",
        "-u",
        "a@example.com",
        "-u",
        "b@example.com",
    ])
    .expect("should parse add members");

    let AddGroupCmd::Members(args) = cmd.cmd;
    assert_eq!(args.id.as_deref(), Some("admins"));
    assert_eq!(args.user_emails, vec!["a@example.com", "b@example.com"]);
}

// parse_add_members_requires_emails ensures add group members fails
// without --user-emails.
#[test]
fn parse_add_members_requires_emails() {
    let result = AddCmd::try_parse_from(["group", "members", "admins"]);
    assert!(result.is_err(), "should fail without --user-emails");
}

// parse_delete_members ensures delete group members is reachable
// below delete group.
#[test]
fn parse_delete_members() {
    let cmd = DeleteGroup::try_parse_from([
        "group",
        "members",
        "-g",
        "admins",
        "-u",
        "a@example.com",
    ])
    .expect("should parse delete members");

    match cmd.command {
        Some(DeleteGroupCmd::Members(args)) => {
            assert_eq!(args.group_id.as_deref(), Some("admins"));
        }
        None => panic!("expected Members subcommand"),
    }
}

// parse_list_members ensures list group members parses with a
// positional group.
#[test]
fn parse_list_members() {
    let cmd = ListCmd::try_parse_from(["group", "members", "admins"])
        .expect("should parse list members");

    let ListGroupCmd::Members(args) = cmd.cmd;
    assert_eq!(args.id.as_deref(), Some("admins"));
}

// parse_list_positional_organization ensures the organization of list
// groups can be named positionally.
#[test]
fn parse_list_positional_organization() {
    let cmd = ListGroups::try_parse_from(["groups", "acme"]).expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("acme"));
}

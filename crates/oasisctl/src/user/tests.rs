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
// Email Resolution  - Mapping of member email addresses to user ids.

use std::collections::HashMap;

use clap::{CommandFactory, Parser};
use rpc::protos::iam::User;

use super::args::*;
use super::cmds::resolve_user_emails;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetSelf::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_self_rejects_arguments ensures get self takes no arguments.
#[test]
fn parse_get_self_rejects_arguments() {
    assert!(GetSelf::try_parse_from(["self"]).is_ok());
    assert!(GetSelf::try_parse_from(["self", "someone"]).is_err());
}

/////////////////////////////////////////////////////////////////////////////
// Email Resolution

fn users() -> HashMap<String, User> {
    [("u1", "alice@example.com"), ("u2", "bob@example.com")]
        .into_iter()
        .map(|(id, email)| {
            (
                email.to_string(),
                User {
                    id: id.to_string(),
                    email: email.to_string(),
                    ..Default::default()
                },
            )
        })
        .collect()
}

// resolve_known_emails keeps the order of the given addresses.
#[test]
fn resolve_known_emails() {
    let ids = resolve_user_emails(
        &users(),
        &["bob@example.com".to_string(), "alice@example.com".to_string()],
        "organization 'acme'",
    )
    .expect("all known");

    assert_eq!(ids, vec!["u2".to_string(), "u1".to_string()]);
}

// resolve_unknown_email_fails names the offending address.
#[test]
fn resolve_unknown_email_fails() {
    let err = resolve_user_emails(
        &users(),
        &["alice@example.com".to_string(), "eve@example.com".to_string()],
        "organization 'acme'",
    )
    .expect_err("eve is unknown");

    assert!(err.to_string().contains("eve@example.com"));
    assert!(err.to_string().contains("organization 'acme'"));
}

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
// Rendering         - The secret of a new key is printed.

use clap::{CommandFactory, Parser};
use rpc::cli::OutputFormat;
use rpc::protos::iam::ApiKeySecret;

use super::args::*;
use crate::output::render_item;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    ListApiKeys::command().debug_assert();
    CreateApiKey::command().debug_assert();
    DeleteApiKey::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_create_defaults ensures a key without flags is neither readonly
// nor limited to an organization.
#[test]
fn parse_create_defaults() {
    let cmd = CreateApiKey::try_parse_from(["apikey"]).expect("should parse create");

    assert!(!cmd.readonly);
    assert!(cmd.organization_id.is_none());
}

// parse_create_readonly_for_organization ensures both flags combine.
#[test]
fn parse_create_readonly_for_organization() {
    let cmd = CreateApiKey::try_parse_from(["apikey", "--readonly", "-o", "acme"])
        .expect("should parse create");

    assert!(cmd.readonly);
    assert_eq!(cmd.organization_id.as_deref(), Some("acme"));
}

// parse_create_rejects_positionals ensures create takes no arguments.
#[test]
fn parse_create_rejects_positionals() {
    let result = CreateApiKey::try_parse_from(["apikey", "extra"]);
    assert!(result.is_err(), "should fail with a positional argument");
}

/////////////////////////////////////////////////////////////////////////////
// Rendering

// render_secret_shows_id_and_secret prints both values.
#[test]
fn render_secret_shows_id_and_secret() {
    let secret = ApiKeySecret {
        id: "key1".to_string(),
        secret: "s3cr3t".to_string(),
    };

    let rendered = render_item(&secret, OutputFormat::Table).expect("renders");

    assert!(rendered.contains("key1"));
    assert!(rendered.contains("s3cr3t"));
}

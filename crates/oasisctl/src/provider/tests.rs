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

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetProvider::command().debug_assert();
    ListProviders::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_by_flag ensures the provider can be given with
// --provider-id.
#[test]
fn parse_get_by_flag() {
    let cmd = GetProvider::try_parse_from(["provider", "--provider-id", "gcp"])
        .expect("should parse get");

    assert!(cmd.id.is_none());
    assert_eq!(cmd.provider_id.as_deref(), Some("gcp"));
}

// parse_list_without_organization ensures providers can be listed
// without an organization filter.
#[test]
fn parse_list_without_organization() {
    let cmd = ListProviders::try_parse_from(["providers"]).expect("should parse list");

    assert_eq!(cmd.scope.organization_id(), None);
}

// parse_list_positional_organization ensures the organization filter
// of list providers can be named positionally.
#[test]
fn parse_list_positional_organization() {
    let cmd = ListProviders::try_parse_from(["providers", "acme"]).expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("acme"));
}

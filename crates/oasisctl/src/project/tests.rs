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
    GetProject::command().debug_assert();
    ListProjects::command().debug_assert();
    CreateProject::command().debug_assert();
    UpdateProject::command().debug_assert();
    DeleteProject::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_with_scope ensures the project and its organization can
// both be given as flags.
#[test]
fn parse_get_with_scope() {
    let cmd = GetProject::try_parse_from(["project", "-o", "acme", "--project-id", "web"])
        .expect("should parse get");

    assert!(cmd.id.is_none());
    assert_eq!(cmd.scope.organization_id(), Some("acme"));
    assert_eq!(cmd.scope.project_id(), Some("web"));
}

// parse_create_positional_name ensures create accepts the name
// positionally.
#[test]
fn parse_create_positional_name() {
    let cmd = CreateProject::try_parse_from(["project", "web", "--description", "Web shop"])
        .expect("should parse create");

    assert_eq!(cmd.name_arg.as_deref(), Some("web"));
    assert!(cmd.name.is_none());
    assert_eq!(cmd.description.as_deref(), Some("Web shop"));
}

// parse_list_rejects_project_flag ensures list only takes the
// organization scope.
#[test]
fn parse_list_rejects_project_flag() {
    assert!(ListProjects::try_parse_from(["projects", "-o", "acme"]).is_ok());
    assert!(ListProjects::try_parse_from(["projects", "-p", "web"]).is_err());
}

// parse_list_positional_organization ensures the organization of list
// projects can be named positionally.
#[test]
fn parse_list_positional_organization() {
    let cmd = ListProjects::try_parse_from(["projects", "acme"]).expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("acme"));
    assert_eq!(cmd.scope.organization_id(), None);
}

// parse_delete_too_many_positionals_fails ensures only one project
// can be named.
#[test]
fn parse_delete_too_many_positionals_fails() {
    let result = DeleteProject::try_parse_from(["project", "web", "shop"]);
    assert!(result.is_err(), "should fail with two projects");
}

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
enum ExampleCmd {
    #[clap(subcommand)]
    List(ListExampleCmd),
    #[clap(subcommand)]
    Get(GetExampleCmd),
    #[clap(subcommand)]
    Create(CreateExampleCmd),
    #[clap(subcommand)]
    Delete(DeleteExampleCmd),
}

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    ExampleCmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_list_installations ensures installations are listed per
// deployment.
#[test]
fn parse_list_installations() {
    let cmd = ExampleCmd::try_parse_from(["example", "list", "installations", "-d", "prod"])
        .expect("should parse list installations");

    match cmd {
        ExampleCmd::List(ListExampleCmd::Installations(args)) => {
            assert_eq!(args.scope.deployment_id(), Some("prod"));
        }
        _ => panic!("expected list installations"),
    }
}

// parse_create_installation ensures the dataset can be given
// positionally.
#[test]
fn parse_create_installation() {
    let cmd = ExampleCmd::try_parse_from([
        "example",
        "create",
        "installation",
        "imdb",
        "--deployment-id",
        "prod",
    ])
    .expect("should parse create installation");

    match cmd {
        ExampleCmd::Create(CreateExampleCmd::Installation(args)) => {
            assert_eq!(args.dataset_arg.as_deref(), Some("imdb"));
            assert_eq!(args.scope.deployment_id(), Some("prod"));
        }
        _ => panic!("expected create installation"),
    }
}

// parse_delete_installation_flag ensures the installation can be
// given with --installation-id.
#[test]
fn parse_delete_installation_flag() {
    let cmd = ExampleCmd::try_parse_from([
        "example",
        "delete",
        "installation",
        "--installation-id",
        "inst1",
    ])
    .expect("should parse delete installation");

    match cmd {
        ExampleCmd::Delete(DeleteExampleCmd::Installation(args)) => {
            assert_eq!(args.installation_id.as_deref(), Some("inst1"));
        }
        _ => panic!("expected delete installation"),
    }
}

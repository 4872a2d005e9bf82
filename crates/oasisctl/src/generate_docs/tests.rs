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
// Generation        - Pages, front-matter and links written to disk.

use clap::{CommandFactory, Parser};

use super::args::*;
use super::cmds::{front_matter, generate, link, title_case};
use crate::cfg::cli_options::CliOptions;

fn opts_for(dir: &std::path::Path) -> Opts {
    Opts {
        output_dir: dir.to_path_buf(),
        link_file_ext: String::new(),
        replace_underscore_with: String::new(),
    }
}

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_defaults ensures the default output directory is ./docs.
#[test]
fn parse_defaults() {
    let opts = Opts::try_parse_from(["generate-docs"]).expect("should parse without flags");

    assert_eq!(opts.output_dir, std::path::PathBuf::from("./docs"));
    assert!(opts.link_file_ext.is_empty());
    assert!(opts.replace_underscore_with.is_empty());
}

// parse_short_flags ensures -o, -l and -r parse.
#[test]
fn parse_short_flags() {
    let opts = Opts::try_parse_from(["generate-docs", "-o", "/tmp/out", "-l", ".html", "-r", "-"])
        .expect("should parse short flags");

    assert_eq!(opts.output_dir, std::path::PathBuf::from("/tmp/out"));
    assert_eq!(opts.link_file_ext, ".html");
    assert_eq!(opts.replace_underscore_with, "-");
}

/////////////////////////////////////////////////////////////////////////////
// Generation

// link_defaults_to_markdown ensures links point at .md files.
#[test]
fn link_defaults_to_markdown() {
    let opts = opts_for(std::path::Path::new("."));
    assert_eq!(link("oasisctl_get", &opts), "oasisctl_get.md");
}

// link_applies_extension_and_replacement ensures both link
// options are honored.
#[test]
fn link_applies_extension_and_replacement() {
    let opts = Opts {
        link_file_ext: ".html".to_string(),
        replace_underscore_with: "-".to_string(),
        ..opts_for(std::path::Path::new("."))
    };
    assert_eq!(link("oasisctl_get_deployment", &opts), "oasisctl-get-deployment.html");
}

// front_matter_names_command ensures the header carries the
// title and description.
#[test]
fn front_matter_names_command() {
    let path = vec!["oasisctl".to_string(), "get".to_string()];
    let header = front_matter(&path);

    assert!(header.starts_with("---\nlayout: default\n"));
    assert!(header.contains("description: Description of the oasisctl get command\n"));
    assert!(header.contains("title: Oasisctl Get\n"));
    assert!(header.ends_with("---\n"));
}

// title_keeps_hyphenated_words ensures words joined by a hyphen are
// each capitalized and keep the hyphen.
#[test]
fn title_keeps_hyphenated_words() {
    let path = vec!["oasisctl".to_string(), "generate-docs".to_string()];

    assert!(front_matter(&path).contains("title: Oasisctl Generate-Docs\n"));
    assert_eq!(title_case("oasisctl list servers-presets"), "Oasisctl List Servers-Presets");
    assert_eq!(title_case("get cacertificate"), "Get Cacertificate");
    assert_eq!(title_case("list_roles"), "List_roles");
}

// generate_requires_existing_directory ensures nothing is
// written into a missing directory.
#[test]
fn generate_requires_existing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = opts_for(&dir.path().join("missing"));

    let err = generate(&opts, CliOptions::command()).expect_err("missing directory");

    assert!(err.to_string().contains("does not exist"));
}

// generate_writes_page_per_command ensures the tree is
// walked and pages link to their parents.
#[test]
fn generate_writes_page_per_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = opts_for(dir.path());

    let written = generate(&opts, CliOptions::command()).expect("generates");

    assert!(written.len() > 10);
    assert!(dir.path().join("oasisctl.md").is_file());
    assert!(!dir.path().join("oasisctl_help.md").exists());

    let page = std::fs::read_to_string(dir.path().join("oasisctl_get_deployment.md"))
        .expect("deployment page");
    assert!(page.starts_with("---\n"));
    assert!(page.contains("## oasisctl get deployment"));
    assert!(page.contains("--deployment-id"));
    assert!(page.contains("### Options inherited from parent commands"));
    assert!(page.contains("--endpoint"));
    assert!(page.contains("[oasisctl get](oasisctl_get.md)"));
}

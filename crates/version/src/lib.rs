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

use std::path::Path;
use std::process::Command;

/// Set build script environment variables. Call this from a build script.
pub fn build() {
    println!(
        "cargo:rustc-env=OASIS_BUILD_USER={}",
        option_env!("USER").unwrap_or_default()
    );
    println!(
        "cargo:rustc-env=OASIS_BUILD_HOSTNAME={}",
        option_env!("HOSTNAME").unwrap_or_default()
    );
    println!(
        "cargo:rustc-env=OASIS_BUILD_DATE={}",
        run("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) // like 'date --iso-8601=seconds --utc' but portable across GNU/BSD
    );
    println!(
        "cargo:rustc-env=OASIS_BUILD_RUSTC_VERSION={}",
        run(option_env!("RUSTC").unwrap_or("rustc"), &["--version"])
    );

    // Source tarballs and containers without the .git directory mounted
    // have no history to describe.
    let can_git = Command::new("git")
        .args(["rev-parse"])
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !can_git {
        println!("cargo:warning=No git, version will be blank");
        // still define it so that we can read it in a build time macro
        println!("cargo:rustc-env=OASIS_BUILD_GIT_TAG=");
        println!("cargo:rustc-env=OASIS_BUILD_GIT_HASH=");
        return;
    }

    let sha = option_env!("CI_COMMIT_SHORT_SHA")
        .map(String::from)
        .unwrap_or_else(|| run("git", &["rev-parse", "--short=8", "HEAD"]));
    println!("cargo:rustc-env=OASIS_BUILD_GIT_HASH={sha}");

    let build_version = option_env!("VERSION").map(String::from).unwrap_or_else(|| {
        run(
            "git",
            &["describe", "--tags", "--first-parent", "--always", "--long"],
        )
    });
    println!("cargo:rustc-env=OASIS_BUILD_GIT_TAG={build_version}");

    // Only re-calculate all of this when there's a new commit. Setting
    // OASIS_VERSION_AVOID_REBUILD skips the HEAD tracking for local
    // iteration loops where a stale version is fine.
    if std::env::var("OASIS_VERSION_AVOID_REBUILD").is_err() {
        let git_head = run("git", &["rev-parse", "--path-format=absolute", "--git-dir"]) + "/HEAD";
        if Path::new(&git_head).exists() {
            println!("cargo:rerun-if-changed={git_head}");
        } else {
            println!("cargo:warning=Git HEAD not found at {git_head}, version may be stale");
        }
    }
}

/// Run a command from a build script returning its stdout, logging errors with cargo:warning
fn run(cmd: &str, args: &[&str]) -> String {
    let output = match Command::new(cmd).args(args).output() {
        Ok(output) => {
            if !output.status.success() {
                println!(
                    "cargo:warning=build.rs failed running '{cmd} {}': '{output:?}'",
                    args.join(" ")
                );
                return String::new();
            }
            output
        }
        Err(err) => {
            println!(
                "cargo:warning=build.rs error running '{cmd} {}': {err}.",
                args.join(" ")
            );
            return String::new();
        }
    };
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Individual parts of the version. Usage:: oasis_version::v!(build_version)
/// If that part is not present expands to an empty &str
#[macro_export]
macro_rules! v {
    (build_version) => {
        option_env!("OASIS_BUILD_GIT_TAG").unwrap_or_default()
    };
    (build_date) => {
        option_env!("OASIS_BUILD_DATE").unwrap_or_default()
    };
    (git_sha) => {
        option_env!("OASIS_BUILD_GIT_HASH").unwrap_or_default()
    };
    (rust_version) => {
        option_env!("OASIS_BUILD_RUSTC_VERSION").unwrap_or_default()
    };
    (build_user) => {
        option_env!("OASIS_BUILD_USER").unwrap_or_default()
    };
    (build_hostname) => {
        option_env!("OASIS_BUILD_HOSTNAME").unwrap_or_default()
    };
}

/// Version as a string. `oasis_version::build()` must have been called previously in build script.
#[macro_export]
macro_rules! version {
    () => {
        format!(
            "build_version={}, build_date={}, git_sha={}, rust_version={}, build_user={}, build_hostname={}",
            option_env!("OASIS_BUILD_GIT_TAG").unwrap_or_default(),
            option_env!("OASIS_BUILD_DATE").unwrap_or_default(),
            option_env!("OASIS_BUILD_GIT_HASH").unwrap_or_default(),
            option_env!("OASIS_BUILD_RUSTC_VERSION").unwrap_or_default(),
            option_env!("OASIS_BUILD_USER").unwrap_or_default(),
            option_env!("OASIS_BUILD_HOSTNAME").unwrap_or_default(),
        )
    };
}

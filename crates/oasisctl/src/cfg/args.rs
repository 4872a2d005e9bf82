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

// Arguments shared by many commands: the scope flags that narrow down where
// a resource lives, and helpers to merge positional and flag values.

use clap::Args;
use rpc::cli::{OasisCliError, OasisCliResult};

#[derive(Args, Debug, Clone, Default)]
pub struct OrganizationScope {
    #[clap(
        short = 'o',
        long,
        env = "OASIS_ORGANIZATION",
        help = "Identifier, name or URL of the organization"
    )]
    pub organization_id: Option<String>,
}

impl OrganizationScope {
    pub fn organization_id(&self) -> Option<&str> {
        non_empty(self.organization_id.as_deref())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectScope {
    #[clap(flatten)]
    pub organization: OrganizationScope,

    #[clap(
        short = 'p',
        long,
        env = "OASIS_PROJECT",
        help = "Identifier, name or URL of the project"
    )]
    pub project_id: Option<String>,
}

impl ProjectScope {
    pub fn organization_id(&self) -> Option<&str> {
        self.organization.organization_id()
    }

    pub fn project_id(&self) -> Option<&str> {
        non_empty(self.project_id.as_deref())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeploymentScope {
    #[clap(flatten)]
    pub project: ProjectScope,

    #[clap(
        short = 'd',
        long,
        env = "OASIS_DEPLOYMENT",
        help = "Identifier, name or URL of the deployment"
    )]
    pub deployment_id: Option<String>,
}

impl DeploymentScope {
    pub fn organization_id(&self) -> Option<&str> {
        self.project.organization_id()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project.project_id()
    }

    pub fn deployment_id(&self) -> Option<&str> {
        non_empty(self.deployment_id.as_deref())
    }
}

/// Treats an empty value the same as an absent one.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Merges a value that can be given both as positional argument and as
/// flag (or its environment variable). The flag wins; a positional argument
/// left over next to it is rejected.
pub fn opt_option<'a>(
    positional: Option<&'a str>,
    flag: Option<&'a str>,
) -> OasisCliResult<Option<&'a str>> {
    match (non_empty(flag), non_empty(positional)) {
        (Some(_), Some(extra)) => Err(OasisCliError::UnexpectedArguments(extra.to_string())),
        (Some(flag), None) => Ok(Some(flag)),
        (None, positional) => Ok(positional),
    }
}

/// Like [opt_option], failing with `--{key} missing` when neither is set.
pub fn req_option<'a>(
    key: &'static str,
    positional: Option<&'a str>,
    flag: Option<&'a str>,
) -> OasisCliResult<&'a str> {
    opt_option(positional, flag)?.ok_or(OasisCliError::MissingArgument(key))
}

/// Applies an optional new value to a field of a record being updated.
/// Returns true when a value was given, even if it equals the current one.
pub fn apply_change<T>(field: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *field = value;
            true
        }
        None => false,
    }
}

/// Adds and removes values of a list field, keeping the existing order.
/// Returns true when any value was added or removed.
pub fn apply_list_change(values: &mut Vec<String>, add: &[String], remove: &[String]) -> bool {
    let before = values.len();
    values.retain(|v| !remove.contains(v));
    let mut changed = values.len() != before;
    for value in add {
        if !values.contains(value) {
            values.push(value.clone());
            changed = true;
        }
    }
    changed
}

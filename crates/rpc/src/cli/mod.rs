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

//! Types shared by command line tools built on top of the API client.

use tonic::Status;

use crate::errors;

#[derive(thiserror::Error, Debug)]
pub enum OasisCliError {
    #[error("The API call returned {}: {}", .0.code(), .0.message())]
    ApiInvocationError(#[from] Status),

    #[error("Generic Error: {0}")]
    GenericError(String),

    #[error("Error while serializing to JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while serializing to YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Error while writing output: {0}")]
    IOError(#[from] std::io::Error),

    #[error("--{0} missing")]
    MissingArgument(&'static str),

    #[error("Unexpected argument(s): {0}")]
    UnexpectedArguments(String),

    #[error("You have access to {count} {kind_plural}. Please specify one explicitly.")]
    NotUnique {
        kind_plural: &'static str,
        count: usize,
    },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

impl OasisCliError {
    /// True if the error is a gRPC NOT_FOUND reported by the platform.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OasisCliError::ApiInvocationError(status) if errors::is_not_found(status))
    }
}

pub type OasisCliResult<T> = Result<T, OasisCliError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_unique_renders_disambiguation_hint() {
        let err = OasisCliError::NotUnique {
            kind_plural: "projects",
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "You have access to 3 projects. Please specify one explicitly."
        );
    }

    #[test]
    fn missing_argument_names_the_flag() {
        assert_eq!(
            OasisCliError::MissingArgument("region-id").to_string(),
            "--region-id missing"
        );
    }

    #[test]
    fn not_found_status_is_detected() {
        let err = OasisCliError::from(Status::not_found("deployment"));
        assert!(err.is_not_found());
        assert!(!OasisCliError::GenericError("x".to_string()).is_not_found());
    }
}

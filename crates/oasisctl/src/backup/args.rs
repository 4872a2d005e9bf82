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

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::cfg::args::DeploymentScope;

fn parse_time(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

#[derive(Parser, Debug)]
pub struct GetBackup {
    #[clap(value_name = "BACKUP", help = "Identifier, name or URL of the backup")]
    pub id: Option<String>,

    #[clap(
        short = 'b',
        long,
        env = "OASIS_BACKUP",
        help = "Identifier, name or URL of the backup"
    )]
    pub backup_id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

#[derive(Parser, Debug)]
pub struct ListBackups {
    #[clap(value_name = "DEPLOYMENT", help = "Identifier, name or URL of the deployment")]
    pub id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,

    #[clap(
        long,
        value_parser = parse_time,
        help = "Only list backups created at or after this time (RFC 3339)"
    )]
    pub from: Option<DateTime<Utc>>,

    #[clap(
        long,
        value_parser = parse_time,
        help = "Only list backups created before this time (RFC 3339)"
    )]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Parser, Debug)]
pub struct CreateBackup {
    #[clap(value_name = "NAME", help = "Name of the backup")]
    pub name_arg: Option<String>,

    #[clap(long, help = "Name of the backup")]
    pub name: Option<String>,

    #[clap(long, help = "Description of the backup")]
    pub description: Option<String>,

    #[clap(long, help = "Upload the backup to cloud storage")]
    pub upload: bool,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

#[derive(Parser, Debug)]
pub struct DeleteBackup {
    #[clap(value_name = "BACKUP", help = "Identifier, name or URL of the backup")]
    pub id: Option<String>,

    #[clap(
        short = 'b',
        long,
        env = "OASIS_BACKUP",
        help = "Identifier, name or URL of the backup"
    )]
    pub backup_id: Option<String>,

    #[clap(flatten)]
    pub scope: DeploymentScope,
}

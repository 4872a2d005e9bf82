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
// Value Parsing     - Time range validation.
// Command Execution - Backups are listed for the selected deployment.

use clap::{CommandFactory, Parser};
use mock_api_server::MockApiServer;
use rpc::protos::backup::{self, Backup, BackupList, ListBackupsRequest};
use rpc::protos::common::{IdOptions, ListOptions};
use rpc::protos::data::{self, Deployment, DeploymentList};
use rpc::protos::resourcemanager::{self, Project};
use tonic::Status;

use super::args::*;
use super::cmds;
use crate::testing::TestRuntime;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetBackup::command().debug_assert();
    ListBackups::command().debug_assert();
    CreateBackup::command().debug_assert();
    DeleteBackup::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_with_deployment ensures a backup can be named inside a
// deployment.
#[test]
fn parse_get_with_deployment() {
    let cmd = GetBackup::try_parse_from(["backup", "nightly", "-d", "prod"])
        .expect("should parse get");

    assert_eq!(cmd.id.as_deref(), Some("nightly"));
    assert_eq!(cmd.scope.deployment_id(), Some("prod"));
}

// parse_create_upload ensures --upload is a switch.
#[test]
fn parse_create_upload() {
    let cmd = CreateBackup::try_parse_from(["backup", "--name", "before-upgrade", "--upload"])
        .expect("should parse create");

    assert_eq!(cmd.name.as_deref(), Some("before-upgrade"));
    assert!(cmd.upload);
}

// parse_list_positional_deployment ensures the deployment of list
// backups can be named positionally.
#[test]
fn parse_list_positional_deployment() {
    let cmd = ListBackups::try_parse_from(["backups", "prod", "-p", "web"])
        .expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("prod"));
    assert_eq!(cmd.scope.project_id(), Some("web"));
    assert_eq!(cmd.scope.deployment_id(), None);
}

/////////////////////////////////////////////////////////////////////////////
// Value Parsing

// parse_list_time_range ensures RFC 3339 bounds are accepted.
#[test]
fn parse_list_time_range() {
    let cmd = ListBackups::try_parse_from([
        "backups",
        "--from",
        "2024-01-01T00:00:00Z",
        "--to",
        "2024-02-01T12:00:00+01:00",
    ])
    .expect("should parse list");

    let from = cmd.from.expect("from given");
    let to = cmd.to.expect("to given");
    assert_eq!(from.timestamp(), 1_704_067_200);
    assert_eq!(to.to_rfc3339(), "2024-02-01T11:00:00+00:00");
}

// parse_list_invalid_time_fails ensures a malformed bound is rejected.
#[test]
fn parse_list_invalid_time_fails() {
    let result = ListBackups::try_parse_from(["backups", "--from", "yesterday"]);
    assert!(result.is_err(), "should fail with a malformed time");
}

/////////////////////////////////////////////////////////////////////////////
// Command Execution

// list_uses_selected_deployment ensures a deployment given by name is
// resolved first and its id is what backups are listed for.
#[tokio::test]
async fn list_uses_selected_deployment() {
    let server = MockApiServer::new()
        .on(data::service::GET_DEPLOYMENT, |req: IdOptions| {
            Err::<Deployment, _>(Status::not_found(req.id))
        })
        .on(resourcemanager::service::GET_PROJECT, |req: IdOptions| {
            Ok(Project {
                id: req.id,
                name: "web".to_string(),
                ..Default::default()
            })
        })
        .on(data::service::LIST_DEPLOYMENTS, |req: ListOptions| {
            if req.context_id != "p1" {
                return Err(Status::invalid_argument("wrong project"));
            }
            Ok(DeploymentList {
                items: vec![Deployment {
                    id: "dep-1".to_string(),
                    name: "prod".to_string(),
                    project_id: "p1".to_string(),
                    ..Default::default()
                }],
            })
        })
        .on(backup::service::LIST_BACKUPS, |req: ListBackupsRequest| {
            if req.deployment_id != "dep-1" {
                return Err(Status::invalid_argument("wrong deployment"));
            }
            Ok(BackupList {
                items: vec![Backup {
                    id: "b1".to_string(),
                    name: "nightly".to_string(),
                    deployment_id: req.deployment_id,
                    ..Default::default()
                }],
            })
        });
    let mut rt = TestRuntime::start(server).await;
    let args = ListBackups::try_parse_from(["backups", "prod", "-p", "p1"]).expect("should parse");

    cmds::list(args, &mut rt.ctx).await.expect("backups are listed");

    assert_eq!(
        rt.api.calls(),
        vec![
            data::service::GET_DEPLOYMENT,
            resourcemanager::service::GET_PROJECT,
            data::service::LIST_DEPLOYMENTS,
            backup::service::LIST_BACKUPS,
        ]
    );
    let output = rt.output().await;
    assert!(output.contains("nightly"), "{output}");
    assert!(output.contains("dep-1"), "{output}");
}

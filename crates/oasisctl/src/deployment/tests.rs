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
// Rendering         - Table output of deployments and presets.
// Command Execution - Update and create against a mocked platform API.

use clap::{CommandFactory, Parser};
use mock_api_server::MockApiServer;
use rpc::cli::{OasisCliError, OutputFormat};
use rpc::protos::common::IdOptions;
use rpc::protos::crypto::{self, CaCertificate};
use rpc::protos::data::{
    self, Deployment, DeploymentStatus, ServersSpec, ServersSpecPreset, ServersSpecPresetList,
    ServersSpecPresetsRequest,
};
use rpc::protos::resourcemanager::{self, Project};
use tonic::Status;

use super::args::*;
use super::cmds;
use crate::output::{render_item, render_list};
use crate::testing::TestRuntime;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetDeployment::command().debug_assert();
    ListDeployments::command().debug_assert();
    CreateDeployment::command().debug_assert();
    UpdateDeployment::command().debug_assert();
    DeleteDeployment::command().debug_assert();
    ListServersSpecPresets::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_full_scope ensures the deployment scope flags nest
// correctly.
#[test]
fn parse_get_full_scope() {
    let cmd = GetDeployment::try_parse_from([
        "deployment",
        "-o",
        "acme",
        "-p",
        "web",
        "-d",
        "prod",
    ])
    .expect("should parse get");

    assert_eq!(cmd.scope.organization_id(), Some("acme"));
    assert_eq!(cmd.scope.project_id(), Some("web"));
    assert_eq!(cmd.scope.deployment_id(), Some("prod"));
}

// parse_list_positional_project ensures the project of list
// deployments can be named positionally.
#[test]
fn parse_list_positional_project() {
    let cmd = ListDeployments::try_parse_from(["deployments", "web"]).expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("web"));
    assert_eq!(cmd.scope.project_id(), None);
}

// parse_presets_positional_project ensures the presets listing takes
// the project positionally next to the region flag.
#[test]
fn parse_presets_positional_project() {
    let cmd =
        ListServersSpecPresets::try_parse_from(["presets", "web", "-r", "gcp-europe-west4"])
            .expect("should parse presets");

    assert_eq!(cmd.id.as_deref(), Some("web"));
    assert_eq!(cmd.region_id.as_deref(), Some("gcp-europe-west4"));
}

// parse_create_all_flags ensures every create flag is accepted.
#[test]
fn parse_create_all_flags() {
    let cmd = CreateDeployment::try_parse_from([
        "deployment",
        "prod",
        "--region-id",
        "gcp-europe-west4",
        "--cacertificate-id",
        "default-ca",
        "--ipwhitelist-id",
        "office",
        "--version",
        "3.11.0",
        "--servers-preset",
        "oneshard-small",
        "-p",
        "web",
    ])
    .expect("should parse create");

    assert_eq!(cmd.name_arg.as_deref(), Some("prod"));
    assert_eq!(cmd.region_id.as_deref(), Some("gcp-europe-west4"));
    assert_eq!(cmd.cacertificate_id.as_deref(), Some("default-ca"));
    assert_eq!(cmd.ipwhitelist_id.as_deref(), Some("office"));
    assert_eq!(cmd.version.as_deref(), Some("3.11.0"));
    assert_eq!(cmd.servers_preset.as_deref(), Some("oneshard-small"));
    assert_eq!(cmd.scope.project_id(), Some("web"));
}

// parse_update_without_changes ensures update parses with only the
// deployment selector; the command itself reports no changes.
#[test]
fn parse_update_without_changes() {
    let cmd =
        UpdateDeployment::try_parse_from(["deployment", "prod"]).expect("should parse update");

    assert!(cmd.name.is_none());
    assert!(cmd.description.is_none());
}

/////////////////////////////////////////////////////////////////////////////
// Rendering

fn deployment() -> Deployment {
    Deployment {
        id: "d1".to_string(),
        name: "prod".to_string(),
        region_id: "gcp-europe-west4".to_string(),
        status: Some(DeploymentStatus {
            endpoint: "https://d1.arangodb.cloud:8529".to_string(),
            ready: true,
            ..Default::default()
        }),
        servers: Some(ServersSpec {
            coordinators: 3,
            coordinator_memory_size: 4,
            dbservers: 3,
            dbserver_memory_size: 8,
            dbserver_disk_size: 32,
        }),
        ..Default::default()
    }
}

// render_deployment_details shows the endpoint and server layout.
#[test]
fn render_deployment_details() {
    let rendered = render_item(&deployment(), OutputFormat::Table).expect("renders");

    assert!(rendered.contains("https://d1.arangodb.cloud:8529"));
    assert!(rendered.contains("3 coordinators (4GB)"));
}

// render_presets_table lists one preset per row.
#[test]
fn render_presets_table() {
    let presets = vec![
        ServersSpecPreset {
            name: "oneshard-small".to_string(),
            servers: Some(ServersSpec::default()),
        },
        ServersSpecPreset {
            name: "cluster-large".to_string(),
            servers: None,
        },
    ];

    let rendered = render_list(&presets, OutputFormat::Table).expect("renders");

    assert!(rendered.contains("oneshard-small"));
    assert!(rendered.contains("cluster-large"));
}

/////////////////////////////////////////////////////////////////////////////
// Command Execution

// update_without_changes_skips_update ensures nothing is sent to the
// platform when no field was given.
#[tokio::test]
async fn update_without_changes_skips_update() {
    let server = MockApiServer::new()
        .on(data::service::GET_DEPLOYMENT, |req: IdOptions| {
            if req.id != "d1" {
                return Err(Status::not_found(req.id));
            }
            Ok(deployment())
        })
        .on(data::service::UPDATE_DEPLOYMENT, |req: Deployment| Ok(req));
    let mut rt = TestRuntime::start(server).await;
    let args = UpdateDeployment::try_parse_from(["deployment", "d1"]).expect("should parse");

    cmds::update(args, &mut rt.ctx).await.expect("update succeeds");

    assert_eq!(rt.api.calls(), vec![data::service::GET_DEPLOYMENT]);
    assert!(!rt.api.called(data::service::UPDATE_DEPLOYMENT));
    assert_eq!(rt.output().await, "No changes\n");
}

// create_with_unknown_preset_fails ensures a preset name that the
// region does not offer fails before the deployment is created.
#[tokio::test]
async fn create_with_unknown_preset_fails() {
    let server = MockApiServer::new()
        .on(resourcemanager::service::GET_PROJECT, |req: IdOptions| {
            Ok(Project {
                id: req.id,
                organization_id: "o1".to_string(),
                ..Default::default()
            })
        })
        .on(crypto::service::GET_CA_CERTIFICATE, |req: IdOptions| {
            Ok(CaCertificate {
                id: req.id,
                ..Default::default()
            })
        })
        .on(
            data::service::LIST_SERVERS_SPEC_PRESETS,
            |req: ServersSpecPresetsRequest| {
                if req.project_id != "p1" || req.region_id != "gcp-europe-west4" {
                    return Err(Status::invalid_argument("wrong scope"));
                }
                Ok(ServersSpecPresetList {
                    items: vec![ServersSpecPreset {
                        name: "oneshard-small".to_string(),
                        servers: Some(ServersSpec::default()),
                    }],
                })
            },
        )
        .on(data::service::CREATE_DEPLOYMENT, |req: Deployment| Ok(req));
    let mut rt = TestRuntime::start(server).await;
    let args = CreateDeployment::try_parse_from([
        "deployment",
        "prod",
        "-p",
        "p1",
        "-r",
        "gcp-europe-west4",
        "-c",
        "ca1",
        "--servers-preset",
        "cluster-huge",
    ])
    .expect("should parse");

    let err = cmds::create(args, &mut rt.ctx)
        .await
        .expect_err("unknown preset fails");

    assert!(matches!(
        err,
        OasisCliError::NotFound { kind: "servers preset", ref id } if id == "cluster-huge"
    ));
    assert_eq!(err.to_string(), "servers preset 'cluster-huge' not found");
    assert!(!rt.api.called(data::service::CREATE_DEPLOYMENT));
}

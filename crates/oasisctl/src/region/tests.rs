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
// Command Execution - Region lookup against a mocked platform API.

use clap::{CommandFactory, Parser};
use mock_api_server::MockApiServer;
use rpc::protos::common::{IdOptions, ListOptions};
use rpc::protos::platform::{self, ListRegionsRequest, Provider, Region, RegionList};
use rpc::protos::resourcemanager::{self, Organization, OrganizationList};
use tonic::Status;

use super::args::*;
use super::cmds;
use crate::testing::TestRuntime;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    GetRegion::command().debug_assert();
    ListRegions::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_get_by_location ensures a location with spaces is accepted
// as the positional region.
#[test]
fn parse_get_by_location() {
    let cmd = GetRegion::try_parse_from(["region", "West Europe", "--provider-id", "aks"])
        .expect("should parse get");

    assert_eq!(cmd.id.as_deref(), Some("West Europe"));
    assert_eq!(cmd.provider_id.as_deref(), Some("aks"));
}

// parse_list_positional_provider ensures the provider of list regions
// can be named positionally.
#[test]
fn parse_list_positional_provider() {
    let cmd = ListRegions::try_parse_from(["regions", "gcp", "-o", "acme"])
        .expect("should parse list");

    assert_eq!(cmd.id.as_deref(), Some("gcp"));
    assert_eq!(cmd.scope.organization_id(), Some("acme"));
}

/////////////////////////////////////////////////////////////////////////////
// Command Execution

// get_by_location_resolves_organization_name ensures an organization
// given by name is resolved to its id before regions are filtered by it.
#[tokio::test]
async fn get_by_location_resolves_organization_name() {
    let server = MockApiServer::new()
        .on(platform::service::GET_REGION, |req: IdOptions| {
            Err::<Region, _>(Status::not_found(req.id))
        })
        .on(resourcemanager::service::GET_ORGANIZATION, |req: IdOptions| {
            if req.id != "o1" {
                return Err(Status::not_found(req.id));
            }
            Ok(Organization {
                id: req.id,
                name: "acme".to_string(),
                ..Default::default()
            })
        })
        .on(resourcemanager::service::LIST_ORGANIZATIONS, |_: ListOptions| {
            Ok(OrganizationList {
                items: vec![Organization {
                    id: "o1".to_string(),
                    name: "acme".to_string(),
                    ..Default::default()
                }],
            })
        })
        .on(platform::service::GET_PROVIDER, |req: IdOptions| {
            Ok(Provider {
                id: req.id,
                name: "AWS".to_string(),
            })
        })
        .on(platform::service::LIST_REGIONS, |req: ListRegionsRequest| {
            if req.organization_id != "o1" || req.provider_id != "aws" {
                return Err(Status::invalid_argument("wrong filter"));
            }
            Ok(RegionList {
                items: vec![Region {
                    id: "aws-eu-central-1".to_string(),
                    provider_id: req.provider_id,
                    location: "Frankfurt".to_string(),
                    available: true,
                }],
            })
        });
    let mut rt = TestRuntime::start(server).await;
    let args = GetRegion::try_parse_from([
        "region",
        "Frankfurt",
        "--provider-id",
        "aws",
        "-o",
        "acme",
    ])
    .expect("should parse");

    cmds::get(args, &mut rt.ctx).await.expect("region is found");

    assert!(rt.api.called(platform::service::LIST_REGIONS));
    let output = rt.output().await;
    assert!(output.contains("aws-eu-central-1"), "{output}");
}

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

// arangodb.cloud.data.v1

use prost_types::Timestamp;

service_methods!("arangodb.cloud.data.v1.DataService" {
    LIST_DEPLOYMENTS => "ListDeployments",
    GET_DEPLOYMENT => "GetDeployment",
    CREATE_DEPLOYMENT => "CreateDeployment",
    UPDATE_DEPLOYMENT => "UpdateDeployment",
    DELETE_DEPLOYMENT => "DeleteDeployment",
    LIST_SERVERS_SPEC_PRESETS => "ListServersSpecPresets",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct CertificateSpec {
    #[prost(string, tag = "1")]
    pub ca_certificate_id: String,
    #[prost(string, repeated, tag = "2")]
    pub alternate_names: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ServersSpec {
    #[prost(int32, tag = "1")]
    pub coordinators: i32,
    #[prost(int32, tag = "2")]
    pub coordinator_memory_size: i32,
    #[prost(int32, tag = "3")]
    pub dbservers: i32,
    #[prost(int32, tag = "4")]
    pub dbserver_memory_size: i32,
    #[prost(int32, tag = "5")]
    pub dbserver_disk_size: i32,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct DeploymentStatus {
    #[prost(string, tag = "1")]
    pub endpoint: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(bool, tag = "3")]
    pub created: bool,
    #[prost(bool, tag = "4")]
    pub ready: bool,
    #[prost(bool, tag = "5")]
    pub upgrading: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Deployment {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub project_id: String,
    #[prost(string, tag = "6")]
    pub region_id: String,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(bool, tag = "8")]
    pub is_deleted: bool,
    #[prost(string, tag = "9")]
    pub version: String,
    #[prost(string, tag = "10")]
    pub ipwhitelist_id: String,
    #[prost(message, optional, tag = "11")]
    pub certificates: Option<CertificateSpec>,
    #[prost(message, optional, tag = "12")]
    pub servers: Option<ServersSpec>,
    #[prost(message, optional, tag = "13")]
    pub status: Option<DeploymentStatus>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct DeploymentList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Deployment>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ServersSpecPresetsRequest {
    #[prost(string, tag = "1")]
    pub project_id: String,
    #[prost(string, tag = "2")]
    pub region_id: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ServersSpecPreset {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub servers: Option<ServersSpec>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ServersSpecPresetList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<ServersSpecPreset>,
}

impl Deployment {
    pub fn ca_certificate_id(&self) -> &str {
        self.certificates
            .as_ref()
            .map(|c| c.ca_certificate_id.as_str())
            .unwrap_or_default()
    }
}

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

// arangodb.cloud.example.v1

use prost_types::Timestamp;

use super::common::ListOptions;

service_methods!("arangodb.cloud.example.v1.ExampleDatasetService" {
    LIST_EXAMPLE_DATASETS => "ListExampleDatasets",
    GET_EXAMPLE_DATASET => "GetExampleDataset",
    LIST_EXAMPLE_DATASET_INSTALLATIONS => "ListExampleDatasetInstallations",
    GET_EXAMPLE_DATASET_INSTALLATION => "GetExampleDatasetInstallation",
    CREATE_EXAMPLE_DATASET_INSTALLATION => "CreateExampleDatasetInstallation",
    DELETE_EXAMPLE_DATASET_INSTALLATION => "DeleteExampleDatasetInstallation",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ExampleDataset {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub guide: String,
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ExampleDatasetList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<ExampleDataset>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListExampleDatasetsRequest {
    #[prost(string, tag = "1")]
    pub organization_id: String,
    #[prost(message, optional, tag = "10")]
    pub options: Option<ListOptions>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct InstallationStatus {
    #[prost(string, tag = "1")]
    pub database_name: String,
    #[prost(string, tag = "2")]
    pub state: String,
    #[prost(bool, tag = "3")]
    pub is_failed: bool,
    #[prost(bool, tag = "4")]
    pub is_available: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ExampleDatasetInstallation {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub deployment_id: String,
    #[prost(string, tag = "4")]
    pub exampledataset_id: String,
    #[prost(message, optional, tag = "5")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub status: Option<InstallationStatus>,
    #[prost(bool, tag = "7")]
    pub is_deleted: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ExampleDatasetInstallationList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<ExampleDatasetInstallation>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListExampleDatasetInstallationsRequest {
    #[prost(string, tag = "1")]
    pub deployment_id: String,
    #[prost(message, optional, tag = "10")]
    pub options: Option<ListOptions>,
}

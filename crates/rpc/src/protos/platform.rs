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

// arangodb.cloud.platform.v1

use super::common::ListOptions;

service_methods!("arangodb.cloud.platform.v1.PlatformService" {
    LIST_PROVIDERS => "ListProviders",
    GET_PROVIDER => "GetProvider",
    LIST_REGIONS => "ListRegions",
    GET_REGION => "GetRegion",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Provider {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ProviderList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Provider>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListProvidersRequest {
    #[prost(message, optional, tag = "1")]
    pub options: Option<ListOptions>,
    #[prost(string, tag = "2")]
    pub organization_id: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Region {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub provider_id: String,
    #[prost(string, tag = "3")]
    pub location: String,
    #[prost(bool, tag = "4")]
    pub available: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct RegionList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Region>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListRegionsRequest {
    #[prost(message, optional, tag = "1")]
    pub options: Option<ListOptions>,
    #[prost(string, tag = "2")]
    pub provider_id: String,
    #[prost(string, tag = "3")]
    pub organization_id: String,
}

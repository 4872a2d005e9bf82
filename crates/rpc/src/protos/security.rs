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

// arangodb.cloud.security.v1

use prost_types::Timestamp;

service_methods!("arangodb.cloud.security.v1.SecurityService" {
    LIST_IP_WHITELISTS => "ListIPWhitelists",
    GET_IP_WHITELIST => "GetIPWhitelist",
    CREATE_IP_WHITELIST => "CreateIPWhitelist",
    UPDATE_IP_WHITELIST => "UpdateIPWhitelist",
    DELETE_IP_WHITELIST => "DeleteIPWhitelist",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct IpWhitelist {
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
    #[prost(string, repeated, tag = "6")]
    pub cidr_ranges: Vec<String>,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct IpWhitelistList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<IpWhitelist>,
}

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

// arangodb.cloud.crypto.v1

use prost_types::Timestamp;

service_methods!("arangodb.cloud.crypto.v1.CryptoService" {
    LIST_CA_CERTIFICATES => "ListCACertificates",
    GET_CA_CERTIFICATE => "GetCACertificate",
    CREATE_CA_CERTIFICATE => "CreateCACertificate",
    UPDATE_CA_CERTIFICATE => "UpdateCACertificate",
    DELETE_CA_CERTIFICATE => "DeleteCACertificate",
    SET_DEFAULT_CA_CERTIFICATE => "SetDefaultCACertificate",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct CaCertificate {
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
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(bool, tag = "7")]
    pub is_default: bool,
    #[prost(string, tag = "8")]
    pub certificate_pem: String,
    #[prost(message, optional, tag = "9")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub expires_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct CaCertificateList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<CaCertificate>,
}

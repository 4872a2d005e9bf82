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

// arangodb.cloud.backup.v1

use prost_types::Timestamp;

use super::common::ListOptions;

service_methods!("arangodb.cloud.backup.v1.BackupService" {
    LIST_BACKUPS => "ListBackups",
    GET_BACKUP => "GetBackup",
    CREATE_BACKUP => "CreateBackup",
    DELETE_BACKUP => "DeleteBackup",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Backup {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub deployment_id: String,
    #[prost(bool, tag = "6")]
    pub upload: bool,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub auto_deleted_at: Option<Timestamp>,
    #[prost(message, optional, tag = "8")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(bool, tag = "9")]
    pub is_deleted: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct BackupList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Backup>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListBackupsRequest {
    #[prost(string, tag = "1")]
    pub deployment_id: String,
    #[prost(message, optional, tag = "2")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub from: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub to: Option<Timestamp>,
    #[prost(message, optional, tag = "10")]
    pub options: Option<ListOptions>,
}

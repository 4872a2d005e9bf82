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

// arangodb.cloud.resourcemanager.v1

use prost_types::Timestamp;

service_methods!("arangodb.cloud.resourcemanager.v1.ResourceManagerService" {
    GET_API_VERSION => "GetAPIVersion",
    LIST_ORGANIZATIONS => "ListOrganizations",
    GET_ORGANIZATION => "GetOrganization",
    CREATE_ORGANIZATION => "CreateOrganization",
    UPDATE_ORGANIZATION => "UpdateOrganization",
    DELETE_ORGANIZATION => "DeleteOrganization",
    LIST_ORGANIZATION_MEMBERS => "ListOrganizationMembers",
    DELETE_ORGANIZATION_MEMBERS => "DeleteOrganizationMembers",
    LIST_PROJECTS => "ListProjects",
    GET_PROJECT => "GetProject",
    CREATE_PROJECT => "CreateProject",
    UPDATE_PROJECT => "UpdateProject",
    DELETE_PROJECT => "DeleteProject",
    LIST_ORGANIZATION_INVITES => "ListOrganizationInvites",
    LIST_MY_ORGANIZATION_INVITES => "ListMyOrganizationInvites",
    GET_ORGANIZATION_INVITE => "GetOrganizationInvite",
    CREATE_ORGANIZATION_INVITE => "CreateOrganizationInvite",
    DELETE_ORGANIZATION_INVITE => "DeleteOrganizationInvite",
    ACCEPT_ORGANIZATION_INVITE => "AcceptOrganizationInvite",
    REJECT_ORGANIZATION_INVITE => "RejectOrganizationInvite",
});

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Organization {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(bool, tag = "5")]
    pub is_deleted: bool,
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub deleted_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct OrganizationList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Organization>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Project {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub organization_id: String,
    #[prost(bool, tag = "6")]
    pub is_deleted: bool,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ProjectList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Project>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Member {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(bool, tag = "2")]
    pub owner: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct MemberList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Member>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct OrganizationMembersRequest {
    #[prost(string, tag = "1")]
    pub organization_id: String,
    #[prost(message, optional, tag = "2")]
    pub members: Option<MemberList>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct OrganizationInvite {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub organization_id: String,
    #[prost(string, tag = "4")]
    pub email: String,
    #[prost(message, optional, tag = "5")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(bool, tag = "6")]
    pub accepted: bool,
    #[prost(bool, tag = "7")]
    pub rejected: bool,
    #[prost(string, tag = "8")]
    pub user_id: String,
    #[prost(string, tag = "9")]
    pub created_by_id: String,
    #[prost(string, tag = "10")]
    pub organization_name: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct OrganizationInviteList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<OrganizationInvite>,
}

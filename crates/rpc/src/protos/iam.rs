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

// arangodb.cloud.iam.v1

use prost_types::Timestamp;

service_methods!("arangodb.cloud.iam.v1.IAMService" {
    GET_THIS_USER => "GetThisUser",
    GET_USER => "GetUser",
    LIST_GROUPS => "ListGroups",
    GET_GROUP => "GetGroup",
    CREATE_GROUP => "CreateGroup",
    UPDATE_GROUP => "UpdateGroup",
    DELETE_GROUP => "DeleteGroup",
    LIST_GROUP_MEMBERS => "ListGroupMembers",
    ADD_GROUP_MEMBERS => "AddGroupMembers",
    DELETE_GROUP_MEMBERS => "DeleteGroupMembers",
    LIST_ROLES => "ListRoles",
    GET_ROLE => "GetRole",
    CREATE_ROLE => "CreateRole",
    UPDATE_ROLE => "UpdateRole",
    DELETE_ROLE => "DeleteRole",
    LIST_PERMISSIONS => "ListPermissions",
    GET_EFFECTIVE_PERMISSIONS => "GetEffectivePermissions",
    GET_POLICY => "GetPolicy",
    ADD_ROLE_BINDINGS => "AddRoleBindings",
    DELETE_ROLE_BINDINGS => "DeleteRoleBindings",
    LIST_API_KEYS => "ListAPIKeys",
    CREATE_API_KEY => "CreateAPIKey",
    DELETE_API_KEY => "DeleteAPIKey",
});

/// Prefix of policy member ids that refer to a user.
pub const MEMBER_ID_USER_PREFIX: &str = "user-";
/// Prefix of policy member ids that refer to a group.
pub const MEMBER_ID_GROUP_PREFIX: &str = "group-";

pub fn member_id_from_user_id(user_id: &str) -> String {
    format!("{MEMBER_ID_USER_PREFIX}{user_id}")
}

pub fn member_id_from_group_id(group_id: &str) -> String {
    format!("{MEMBER_ID_GROUP_PREFIX}{group_id}")
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub given_name: String,
    #[prost(string, tag = "5")]
    pub family_name: String,
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Group {
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
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct GroupList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Group>,
}

/// User ids of the members of a group.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct GroupMemberList {
    #[prost(string, repeated, tag = "1")]
    pub items: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct GroupMembersRequest {
    #[prost(string, tag = "1")]
    pub group_id: String,
    #[prost(string, repeated, tag = "2")]
    pub user_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Role {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, repeated, tag = "5")]
    pub permissions: Vec<String>,
    #[prost(bool, tag = "6")]
    pub is_predefined: bool,
    #[prost(string, tag = "7")]
    pub organization_id: String,
    #[prost(message, optional, tag = "8")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct RoleList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Role>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct PermissionList {
    #[prost(string, repeated, tag = "1")]
    pub items: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct RoleBinding {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub member_id: String,
    #[prost(string, tag = "3")]
    pub role_id: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Policy {
    #[prost(string, tag = "1")]
    pub resource_url: String,
    #[prost(message, repeated, tag = "2")]
    pub bindings: Vec<RoleBinding>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct RoleBindingsRequest {
    #[prost(string, tag = "1")]
    pub resource_url: String,
    #[prost(message, repeated, tag = "2")]
    pub bindings: Vec<RoleBinding>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ApiKey {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub user_id: String,
    #[prost(string, tag = "4")]
    pub organization_id: String,
    #[prost(bool, tag = "5")]
    pub is_readonly: bool,
    #[prost(message, optional, tag = "6")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "7")]
    #[serde(serialize_with = "super::timestamp::serialize")]
    pub expires_at: Option<Timestamp>,
    #[prost(bool, tag = "8")]
    pub is_expired: bool,
    #[prost(bool, tag = "9")]
    pub is_revoked: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ApiKeyList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<ApiKey>,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct CreateApiKeyRequest {
    #[prost(string, tag = "1")]
    pub organization_id: String,
    #[prost(bool, tag = "2")]
    pub readonly: bool,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ApiKeySecret {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub secret: String,
}

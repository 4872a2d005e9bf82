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

// One async method per unary RPC. Requests accept anything convertible into
// the request message, so `client.get_project("id")` works as well as
// passing a fully built message.

use tonic::Status;

use super::OasisApiClient;
use crate::protos::backup::{self, Backup, BackupList, ListBackupsRequest};
use crate::protos::common::{Empty, IdOptions, ListOptions, UrlOptions, Version};
use crate::protos::crypto::{self, CaCertificate, CaCertificateList};
use crate::protos::data::{
    self, Deployment, DeploymentList, ServersSpecPresetList, ServersSpecPresetsRequest,
};
use crate::protos::example::{
    self, ExampleDataset, ExampleDatasetInstallation, ExampleDatasetInstallationList,
    ExampleDatasetList, ListExampleDatasetInstallationsRequest, ListExampleDatasetsRequest,
};
use crate::protos::iam::{
    self, ApiKeyList, ApiKeySecret, CreateApiKeyRequest, Group, GroupList, GroupMemberList,
    GroupMembersRequest, PermissionList, Policy, Role, RoleBindingsRequest, RoleList, User,
};
use crate::protos::platform::{
    self, ListProvidersRequest, ListRegionsRequest, Provider, ProviderList, Region, RegionList,
};
use crate::protos::resourcemanager::{
    self, MemberList, Organization, OrganizationInvite, OrganizationInviteList,
    OrganizationList, OrganizationMembersRequest, Project, ProjectList,
};
use crate::protos::security::{self, IpWhitelist, IpWhitelistList};

macro_rules! unary_methods {
    ($($name:ident($path:expr, $req:ty) -> $resp:ty;)*) => {
        impl OasisApiClient {
            $(
                pub async fn $name<T: Into<$req>>(&self, request: T) -> Result<$resp, Status> {
                    self.unary($path, request.into()).await
                }
            )*
        }
    };
}

unary_methods! {
    // resourcemanager
    get_api_version(resourcemanager::service::GET_API_VERSION, Empty) -> Version;
    list_organizations(resourcemanager::service::LIST_ORGANIZATIONS, ListOptions) -> OrganizationList;
    get_organization(resourcemanager::service::GET_ORGANIZATION, IdOptions) -> Organization;
    create_organization(resourcemanager::service::CREATE_ORGANIZATION, Organization) -> Organization;
    update_organization(resourcemanager::service::UPDATE_ORGANIZATION, Organization) -> Organization;
    delete_organization(resourcemanager::service::DELETE_ORGANIZATION, IdOptions) -> Empty;
    list_organization_members(resourcemanager::service::LIST_ORGANIZATION_MEMBERS, ListOptions) -> MemberList;
    delete_organization_members(resourcemanager::service::DELETE_ORGANIZATION_MEMBERS, OrganizationMembersRequest) -> Empty;
    list_projects(resourcemanager::service::LIST_PROJECTS, ListOptions) -> ProjectList;
    get_project(resourcemanager::service::GET_PROJECT, IdOptions) -> Project;
    create_project(resourcemanager::service::CREATE_PROJECT, Project) -> Project;
    update_project(resourcemanager::service::UPDATE_PROJECT, Project) -> Project;
    delete_project(resourcemanager::service::DELETE_PROJECT, IdOptions) -> Empty;
    list_organization_invites(resourcemanager::service::LIST_ORGANIZATION_INVITES, ListOptions) -> OrganizationInviteList;
    list_my_organization_invites(resourcemanager::service::LIST_MY_ORGANIZATION_INVITES, ListOptions) -> OrganizationInviteList;
    get_organization_invite(resourcemanager::service::GET_ORGANIZATION_INVITE, IdOptions) -> OrganizationInvite;
    create_organization_invite(resourcemanager::service::CREATE_ORGANIZATION_INVITE, OrganizationInvite) -> OrganizationInvite;
    delete_organization_invite(resourcemanager::service::DELETE_ORGANIZATION_INVITE, IdOptions) -> Empty;
    accept_organization_invite(resourcemanager::service::ACCEPT_ORGANIZATION_INVITE, IdOptions) -> Empty;
    reject_organization_invite(resourcemanager::service::REJECT_ORGANIZATION_INVITE, IdOptions) -> Empty;

    // iam
    get_this_user(iam::service::GET_THIS_USER, Empty) -> User;
    get_user(iam::service::GET_USER, IdOptions) -> User;
    list_groups(iam::service::LIST_GROUPS, ListOptions) -> GroupList;
    get_group(iam::service::GET_GROUP, IdOptions) -> Group;
    create_group(iam::service::CREATE_GROUP, Group) -> Group;
    update_group(iam::service::UPDATE_GROUP, Group) -> Group;
    delete_group(iam::service::DELETE_GROUP, IdOptions) -> Empty;
    list_group_members(iam::service::LIST_GROUP_MEMBERS, ListOptions) -> GroupMemberList;
    add_group_members(iam::service::ADD_GROUP_MEMBERS, GroupMembersRequest) -> Empty;
    delete_group_members(iam::service::DELETE_GROUP_MEMBERS, GroupMembersRequest) -> Empty;
    list_roles(iam::service::LIST_ROLES, ListOptions) -> RoleList;
    get_role(iam::service::GET_ROLE, IdOptions) -> Role;
    create_role(iam::service::CREATE_ROLE, Role) -> Role;
    update_role(iam::service::UPDATE_ROLE, Role) -> Role;
    delete_role(iam::service::DELETE_ROLE, IdOptions) -> Empty;
    list_permissions(iam::service::LIST_PERMISSIONS, ListOptions) -> PermissionList;
    get_effective_permissions(iam::service::GET_EFFECTIVE_PERMISSIONS, UrlOptions) -> PermissionList;
    get_policy(iam::service::GET_POLICY, UrlOptions) -> Policy;
    add_role_bindings(iam::service::ADD_ROLE_BINDINGS, RoleBindingsRequest) -> Policy;
    delete_role_bindings(iam::service::DELETE_ROLE_BINDINGS, RoleBindingsRequest) -> Policy;
    list_api_keys(iam::service::LIST_API_KEYS, ListOptions) -> ApiKeyList;
    create_api_key(iam::service::CREATE_API_KEY, CreateApiKeyRequest) -> ApiKeySecret;
    delete_api_key(iam::service::DELETE_API_KEY, IdOptions) -> Empty;

    // crypto
    list_ca_certificates(crypto::service::LIST_CA_CERTIFICATES, ListOptions) -> CaCertificateList;
    get_ca_certificate(crypto::service::GET_CA_CERTIFICATE, IdOptions) -> CaCertificate;
    create_ca_certificate(crypto::service::CREATE_CA_CERTIFICATE, CaCertificate) -> CaCertificate;
    update_ca_certificate(crypto::service::UPDATE_CA_CERTIFICATE, CaCertificate) -> CaCertificate;
    delete_ca_certificate(crypto::service::DELETE_CA_CERTIFICATE, IdOptions) -> Empty;
    set_default_ca_certificate(crypto::service::SET_DEFAULT_CA_CERTIFICATE, CaCertificate) -> Empty;

    // security
    list_ip_whitelists(security::service::LIST_IP_WHITELISTS, ListOptions) -> IpWhitelistList;
    get_ip_whitelist(security::service::GET_IP_WHITELIST, IdOptions) -> IpWhitelist;
    create_ip_whitelist(security::service::CREATE_IP_WHITELIST, IpWhitelist) -> IpWhitelist;
    update_ip_whitelist(security::service::UPDATE_IP_WHITELIST, IpWhitelist) -> IpWhitelist;
    delete_ip_whitelist(security::service::DELETE_IP_WHITELIST, IdOptions) -> Empty;

    // platform
    list_providers(platform::service::LIST_PROVIDERS, ListProvidersRequest) -> ProviderList;
    get_provider(platform::service::GET_PROVIDER, IdOptions) -> Provider;
    list_regions(platform::service::LIST_REGIONS, ListRegionsRequest) -> RegionList;
    get_region(platform::service::GET_REGION, IdOptions) -> Region;

    // data
    list_deployments(data::service::LIST_DEPLOYMENTS, ListOptions) -> DeploymentList;
    get_deployment(data::service::GET_DEPLOYMENT, IdOptions) -> Deployment;
    create_deployment(data::service::CREATE_DEPLOYMENT, Deployment) -> Deployment;
    update_deployment(data::service::UPDATE_DEPLOYMENT, Deployment) -> Deployment;
    delete_deployment(data::service::DELETE_DEPLOYMENT, IdOptions) -> Empty;
    list_servers_spec_presets(data::service::LIST_SERVERS_SPEC_PRESETS, ServersSpecPresetsRequest) -> ServersSpecPresetList;

    // backup
    list_backups(backup::service::LIST_BACKUPS, ListBackupsRequest) -> BackupList;
    get_backup(backup::service::GET_BACKUP, IdOptions) -> Backup;
    create_backup(backup::service::CREATE_BACKUP, Backup) -> Backup;
    delete_backup(backup::service::DELETE_BACKUP, IdOptions) -> Empty;

    // example
    list_example_datasets(example::service::LIST_EXAMPLE_DATASETS, ListExampleDatasetsRequest) -> ExampleDatasetList;
    get_example_dataset(example::service::GET_EXAMPLE_DATASET, IdOptions) -> ExampleDataset;
    list_example_dataset_installations(example::service::LIST_EXAMPLE_DATASET_INSTALLATIONS, ListExampleDatasetInstallationsRequest) -> ExampleDatasetInstallationList;
    get_example_dataset_installation(example::service::GET_EXAMPLE_DATASET_INSTALLATION, IdOptions) -> ExampleDatasetInstallation;
    create_example_dataset_installation(example::service::CREATE_EXAMPLE_DATASET_INSTALLATION, ExampleDatasetInstallation) -> ExampleDatasetInstallation;
    delete_example_dataset_installation(example::service::DELETE_EXAMPLE_DATASET_INSTALLATION, IdOptions) -> Empty;
}

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

use rpc::cli::OasisCliResult;
use rpc::protos::backup::{Backup, ListBackupsRequest};
use rpc::protos::common::ListOptions;
use rpc::protos::crypto::CaCertificate;
use rpc::protos::data::Deployment;
use rpc::protos::iam::{Group, Role};
use rpc::protos::platform::{ListProvidersRequest, ListRegionsRequest, Provider, Region};
use rpc::protos::resourcemanager::{Organization, OrganizationInvite, Project};
use rpc::protos::security::IpWhitelist;

use super::{Lookup, Selectable, select};
use crate::cfg::args::non_empty;
use crate::rpc::ApiClient;

macro_rules! selectable {
    ($ty:ty, $kind:literal, $plural:literal, name = $name:ident, url = $url:ident) => {
        impl Selectable for $ty {
            const KIND: &'static str = $kind;
            const KIND_PLURAL: &'static str = $plural;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.$name
            }

            fn url(&self) -> &str {
                &self.$url
            }
        }
    };
    ($ty:ty, $kind:literal, $plural:literal, name = $name:ident) => {
        impl Selectable for $ty {
            const KIND: &'static str = $kind;
            const KIND_PLURAL: &'static str = $plural;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.$name
            }
        }
    };
}

selectable!(Organization, "organization", "organizations", name = name, url = url);
selectable!(
    OrganizationInvite,
    "organization invite",
    "organization invites",
    name = email,
    url = url
);
selectable!(Project, "project", "projects", name = name, url = url);
selectable!(Group, "group", "groups", name = name, url = url);
selectable!(Role, "role", "roles", name = name, url = url);
selectable!(CaCertificate, "CA certificate", "CA certificates", name = name, url = url);
selectable!(IpWhitelist, "IP whitelist", "IP whitelists", name = name, url = url);
selectable!(Deployment, "deployment", "deployments", name = name, url = url);
selectable!(Backup, "backup", "backups", name = name, url = url);
selectable!(Provider, "provider", "providers", name = name);
selectable!(Region, "region", "regions", name = location);

/////////////////////////////////////////////////////////////////////////////
// Resource manager

/// Organizations the caller is a member of.
pub struct Organizations<'a> {
    pub api: &'a ApiClient,
}

#[async_trait::async_trait]
impl Lookup<Organization> for Organizations<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Organization> {
        Ok(self.api.0.get_organization(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Organization>> {
        Ok(self
            .api
            .0
            .list_organizations(ListOptions::default())
            .await?
            .items)
    }
}

/// Invites of an organization, or the invites addressed to the caller when
/// no organization is given.
pub struct OrganizationInvites<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<OrganizationInvite> for OrganizationInvites<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<OrganizationInvite> {
        Ok(self.api.0.get_organization_invite(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<OrganizationInvite>> {
        let list = match self.organization_id.filter(|id| !id.is_empty()) {
            Some(organization_id) => {
                let organization = select_organization(self.api, Some(organization_id)).await?;
                self.api
                    .0
                    .list_organization_invites(ListOptions::in_context(organization.id))
                    .await?
            }
            None => {
                self.api
                    .0
                    .list_my_organization_invites(ListOptions::default())
                    .await?
            }
        };
        Ok(list.items)
    }
}

/// Projects of an organization.
pub struct Projects<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Project> for Projects<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Project> {
        Ok(self.api.0.get_project(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Project>> {
        let organization = select_organization(self.api, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_projects(ListOptions::in_context(organization.id))
            .await?
            .items)
    }
}

/////////////////////////////////////////////////////////////////////////////
// IAM

/// Groups of an organization.
pub struct Groups<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Group> for Groups<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Group> {
        Ok(self.api.0.get_group(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Group>> {
        let organization = select_organization(self.api, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_groups(ListOptions::in_context(organization.id))
            .await?
            .items)
    }
}

/// Roles of an organization, including the predefined ones.
pub struct Roles<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Role> for Roles<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Role> {
        Ok(self.api.0.get_role(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Role>> {
        let organization = select_organization(self.api, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_roles(ListOptions::in_context(organization.id))
            .await?
            .items)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Project scoped resources

/// CA certificates of a project.
pub struct CaCertificates<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<CaCertificate> for CaCertificates<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<CaCertificate> {
        Ok(self.api.0.get_ca_certificate(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<CaCertificate>> {
        let project = select_project(self.api, self.project_id, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_ca_certificates(ListOptions::in_context(project.id))
            .await?
            .items)
    }
}

/// IP whitelists of a project.
pub struct IpWhitelists<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<IpWhitelist> for IpWhitelists<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<IpWhitelist> {
        Ok(self.api.0.get_ip_whitelist(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<IpWhitelist>> {
        let project = select_project(self.api, self.project_id, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_ip_whitelists(ListOptions::in_context(project.id))
            .await?
            .items)
    }
}

/// Deployments of a project.
pub struct Deployments<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Deployment> for Deployments<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Deployment> {
        Ok(self.api.0.get_deployment(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Deployment>> {
        let project = select_project(self.api, self.project_id, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_deployments(ListOptions::in_context(project.id))
            .await?
            .items)
    }
}

/// Backups of a deployment.
pub struct Backups<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
    pub deployment_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Backup> for Backups<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Backup> {
        Ok(self.api.0.get_backup(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Backup>> {
        let deployment = select_deployment(
            self.api,
            self.deployment_id,
            self.organization_id,
            self.project_id,
        )
        .await?;
        Ok(self
            .api
            .0
            .list_backups(ListBackupsRequest {
                deployment_id: deployment.id,
                ..Default::default()
            })
            .await?
            .items)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Platform

/// Cloud providers, optionally limited to those available to an
/// organization.
pub struct Providers<'a> {
    pub api: &'a ApiClient,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Provider> for Providers<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Provider> {
        Ok(self.api.0.get_provider(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Provider>> {
        let organization_id = organization_filter(self.api, self.organization_id).await?;
        Ok(self
            .api
            .0
            .list_providers(ListProvidersRequest {
                options: Some(ListOptions::default()),
                organization_id,
            })
            .await?
            .items)
    }
}

/// Regions of a provider.
pub struct Regions<'a> {
    pub api: &'a ApiClient,
    pub provider_id: Option<&'a str>,
    pub organization_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl Lookup<Region> for Regions<'_> {
    async fn get(&self, id: &str) -> OasisCliResult<Region> {
        Ok(self.api.0.get_region(id).await?)
    }

    async fn list(&self) -> OasisCliResult<Vec<Region>> {
        let organization_id = organization_filter(self.api, self.organization_id).await?;
        let provider_scope = non_empty(Some(organization_id.as_str()));
        let provider = select_provider(self.api, self.provider_id, provider_scope).await?;
        Ok(self
            .api
            .0
            .list_regions(ListRegionsRequest {
                options: Some(ListOptions::default()),
                provider_id: provider.id,
                organization_id,
            })
            .await?
            .items)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Shorthands used by the commands

pub async fn select_organization(
    api: &ApiClient,
    id: Option<&str>,
) -> OasisCliResult<Organization> {
    select(&Organizations { api }, id).await
}

/// Resolves an optional organization filter into an organization identifier,
/// empty when no organization was given.
pub async fn organization_filter(
    api: &ApiClient,
    organization_id: Option<&str>,
) -> OasisCliResult<String> {
    match organization_id.filter(|id| !id.is_empty()) {
        Some(id) => Ok(select_organization(api, Some(id)).await?.id),
        None => Ok(String::new()),
    }
}

pub async fn select_organization_invite(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<OrganizationInvite> {
    select(
        &OrganizationInvites {
            api,
            organization_id,
        },
        id,
    )
    .await
}

pub async fn select_project(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<Project> {
    select(
        &Projects {
            api,
            organization_id,
        },
        id,
    )
    .await
}

pub async fn select_group(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<Group> {
    select(
        &Groups {
            api,
            organization_id,
        },
        id,
    )
    .await
}

pub async fn select_role(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<Role> {
    select(
        &Roles {
            api,
            organization_id,
        },
        id,
    )
    .await
}

pub async fn select_ca_certificate(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
    project_id: Option<&str>,
) -> OasisCliResult<CaCertificate> {
    select(
        &CaCertificates {
            api,
            organization_id,
            project_id,
        },
        id,
    )
    .await
}

pub async fn select_ip_whitelist(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
    project_id: Option<&str>,
) -> OasisCliResult<IpWhitelist> {
    select(
        &IpWhitelists {
            api,
            organization_id,
            project_id,
        },
        id,
    )
    .await
}

pub async fn select_deployment(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
    project_id: Option<&str>,
) -> OasisCliResult<Deployment> {
    select(
        &Deployments {
            api,
            organization_id,
            project_id,
        },
        id,
    )
    .await
}

pub async fn select_backup(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
    project_id: Option<&str>,
    deployment_id: Option<&str>,
) -> OasisCliResult<Backup> {
    select(
        &Backups {
            api,
            organization_id,
            project_id,
            deployment_id,
        },
        id,
    )
    .await
}

pub async fn select_provider(
    api: &ApiClient,
    id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<Provider> {
    select(
        &Providers {
            api,
            organization_id,
        },
        id,
    )
    .await
}

pub async fn select_region(
    api: &ApiClient,
    id: Option<&str>,
    provider_id: Option<&str>,
    organization_id: Option<&str>,
) -> OasisCliResult<Region> {
    select(
        &Regions {
            api,
            provider_id,
            organization_id,
        },
        id,
    )
    .await
}

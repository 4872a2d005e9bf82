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

// The command line of oasisctl: global options and the verb-first
// command tree. Verbs forward to the resource modules.

use clap::{Parser, Subcommand};
use rpc::cli::{OasisCliResult, OutputFormat};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::{
    apikey, backup, cacertificate, deployment, example, generate_docs, generate_shell_complete,
    group, ipwhitelist, organization, permission, policy, project, provider, region, role, user,
    version,
};

pub const DEFAULT_ENDPOINT: &str = "api.cloud.arangodb.com";

#[derive(Parser, Debug)]
#[clap(name = "oasisctl", about = "ArangoDB Oasis command line tool")]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "OASIS_TOKEN",
        hide_env_values = true,
        default_value = "",
        help = "Token used to authenticate at the platform"
    )]
    pub token: String,

    #[clap(
        long,
        global = true,
        env = "OASIS_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        help = "Endpoint of the platform API"
    )]
    pub endpoint: String,

    #[clap(
        long,
        global = true,
        env = "OASIS_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[clap(long, global = true, help = "Enable debug output")]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: CliCommand,
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CliCommand {
    #[clap(subcommand, about = "Get information")]
    Get(GetCmd),

    #[clap(subcommand, about = "List resources")]
    List(ListCmd),

    #[clap(subcommand, about = "Create resources")]
    Create(CreateCmd),

    #[clap(subcommand, about = "Update resources")]
    Update(UpdateCmd),

    #[clap(subcommand, about = "Delete resources")]
    Delete(DeleteCmd),

    #[clap(subcommand, about = "Add resources")]
    Add(AddCmd),

    #[clap(subcommand, about = "Accept invites")]
    Accept(AcceptCmd),

    #[clap(subcommand, about = "Reject invites")]
    Reject(RejectCmd),

    #[clap(about = "Show the version information of this tool")]
    Version(version::Opts),

    #[clap(about = "Generate Markdown documentation for every command")]
    GenerateDocs(generate_docs::Opts),

    #[clap(about = "Generate the autocompletion script for the specified shell")]
    Completion(generate_shell_complete::Cmd),
}

#[derive(Subcommand, Debug)]
pub enum GetCmd {
    #[clap(about = "Get an organization the authenticated user is a member of")]
    Organization(organization::GetOrganization),

    #[clap(about = "Get a project the authenticated user has access to")]
    Project(project::GetProject),

    #[clap(about = "Get a deployment the authenticated user has access to")]
    Deployment(deployment::GetDeployment),

    #[clap(about = "Get a group the authenticated user has access to")]
    Group(group::GetGroup),

    #[clap(about = "Get a role the authenticated user has access to")]
    Role(role::GetRole),

    #[clap(about = "Get a CA certificate the authenticated user has access to")]
    Cacertificate(cacertificate::GetCaCertificate),

    #[clap(about = "Get an IP whitelist the authenticated user has access to")]
    Ipwhitelist(ipwhitelist::GetIpWhitelist),

    #[clap(about = "Get a provider the authenticated user has access to")]
    Provider(provider::GetProvider),

    #[clap(about = "Get a region the authenticated user has access to")]
    Region(region::GetRegion),

    #[clap(about = "Get a backup")]
    Backup(backup::GetBackup),

    #[clap(about = "Get a policy the authenticated user has access to")]
    Policy(policy::GetPolicy),

    #[clap(name = "self", about = "Get information about the authenticated user")]
    SelfUser(user::GetSelf),

    #[clap(subcommand, about = "Get effective information")]
    Effective(permission::GetEffectiveCmd),

    #[clap(subcommand, about = "Get a single example resource")]
    Example(example::GetExampleCmd),
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum ListCmd {
    #[clap(about = "List all organizations the authenticated user is a member of")]
    Organizations(organization::ListOrganizations),

    #[clap(subcommand, about = "List organization resources")]
    Organization(organization::ListOrganizationCmd),

    #[clap(about = "List all projects of an organization")]
    Projects(project::ListProjects),

    #[clap(about = "List all deployments of a project")]
    Deployments(deployment::ListDeployments),

    #[clap(about = "List all groups of an organization")]
    Groups(group::ListGroups),

    #[clap(subcommand, about = "List group resources")]
    Group(group::ListGroupCmd),

    #[clap(about = "List all roles of an organization")]
    Roles(role::ListRoles),

    #[clap(about = "List all CA certificates of a project")]
    Cacertificates(cacertificate::ListCaCertificates),

    #[clap(about = "List all IP whitelists of a project")]
    Ipwhitelists(ipwhitelist::ListIpWhitelists),

    #[clap(about = "List all providers the authenticated user has access to")]
    Providers(provider::ListProviders),

    #[clap(about = "List all regions of a provider")]
    Regions(region::ListRegions),

    #[clap(about = "List backups of a deployment")]
    Backups(backup::ListBackups),

    #[clap(about = "List the API keys of the authenticated user")]
    Apikeys(apikey::ListApiKeys),

    #[clap(about = "List the known permissions")]
    Permissions(permission::ListPermissions),

    #[clap(about = "List servers spec presets available in a project and region")]
    ServersPresets(deployment::ListServersSpecPresets),

    #[clap(subcommand, about = "List example resources")]
    Example(example::ListExampleCmd),
}

#[derive(Subcommand, Debug)]
pub enum CreateCmd {
    #[clap(about = "Create a new organization")]
    Organization(organization::CreateOrganization),

    #[clap(about = "Create a new project")]
    Project(project::CreateProject),

    #[clap(about = "Create a new deployment")]
    Deployment(deployment::CreateDeployment),

    #[clap(about = "Create a new group")]
    Group(group::CreateGroup),

    #[clap(about = "Create a new role")]
    Role(role::CreateRole),

    #[clap(about = "Create a new CA certificate")]
    Cacertificate(cacertificate::CreateCaCertificate),

    #[clap(about = "Create a new IP whitelist")]
    Ipwhitelist(ipwhitelist::CreateIpWhitelist),

    #[clap(about = "Create a new API key")]
    Apikey(apikey::CreateApiKey),

    #[clap(about = "Create a backup of a deployment")]
    Backup(backup::CreateBackup),

    #[clap(subcommand, about = "Create example resources")]
    Example(example::CreateExampleCmd),
}

#[derive(Subcommand, Debug)]
pub enum UpdateCmd {
    #[clap(about = "Update an organization the authenticated user has access to")]
    Organization(organization::UpdateOrganization),

    #[clap(about = "Update a project the authenticated user has access to")]
    Project(project::UpdateProject),

    #[clap(about = "Update a deployment the authenticated user has access to")]
    Deployment(deployment::UpdateDeployment),

    #[clap(about = "Update a group the authenticated user has access to")]
    Group(group::UpdateGroup),

    #[clap(about = "Update a role the authenticated user has access to")]
    Role(role::UpdateRole),

    #[clap(about = "Update a CA certificate the authenticated user has access to")]
    Cacertificate(cacertificate::UpdateCaCertificate),

    #[clap(about = "Update an IP whitelist the authenticated user has access to")]
    Ipwhitelist(ipwhitelist::UpdateIpWhitelist),

    #[clap(subcommand, about = "Update a policy")]
    Policy(policy::UpdatePolicyCmd),
}

#[derive(Subcommand, Debug)]
pub enum DeleteCmd {
    #[clap(about = "Delete an organization the authenticated user has access to")]
    Organization(organization::DeleteOrganization),

    #[clap(about = "Delete a project the authenticated user has access to")]
    Project(project::DeleteProject),

    #[clap(about = "Delete a deployment the authenticated user has access to")]
    Deployment(deployment::DeleteDeployment),

    #[clap(about = "Delete a group the authenticated user has access to")]
    Group(group::DeleteGroup),

    #[clap(about = "Delete a role the authenticated user has access to")]
    Role(role::DeleteRole),

    #[clap(about = "Delete a CA certificate the authenticated user has access to")]
    Cacertificate(cacertificate::DeleteCaCertificate),

    #[clap(about = "Delete an IP whitelist the authenticated user has access to")]
    Ipwhitelist(ipwhitelist::DeleteIpWhitelist),

    #[clap(about = "Delete an API key with the given identifier")]
    Apikey(apikey::DeleteApiKey),

    #[clap(about = "Delete a backup")]
    Backup(backup::DeleteBackup),

    #[clap(subcommand, about = "Delete example resources")]
    Example(example::DeleteExampleCmd),
}

#[derive(Subcommand, Debug)]
pub enum AddCmd {
    #[clap(subcommand, about = "Add group resources")]
    Group(group::AddGroupCmd),
}

#[derive(Subcommand, Debug)]
pub enum AcceptCmd {
    #[clap(subcommand, about = "Accept organization related invites")]
    Organization(organization::AcceptOrganizationCmd),
}

#[derive(Subcommand, Debug)]
pub enum RejectCmd {
    #[clap(subcommand, about = "Reject organization related invites")]
    Organization(organization::RejectOrganizationCmd),
}

impl Dispatch for CliCommand {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            CliCommand::Get(cmd) => cmd.dispatch(ctx).await,
            CliCommand::List(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Create(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Update(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Delete(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Add(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Accept(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Reject(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Version(cmd) => cmd.dispatch(ctx).await,
            CliCommand::GenerateDocs(cmd) => cmd.dispatch(ctx).await,
            CliCommand::Completion(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for GetCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            GetCmd::Organization(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Project(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Deployment(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Group(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Role(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Cacertificate(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Ipwhitelist(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Provider(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Region(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Backup(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Policy(cmd) => cmd.dispatch(ctx).await,
            GetCmd::SelfUser(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Effective(cmd) => cmd.dispatch(ctx).await,
            GetCmd::Example(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for ListCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            ListCmd::Organizations(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Organization(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Projects(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Deployments(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Groups(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Group(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Roles(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Cacertificates(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Ipwhitelists(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Providers(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Regions(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Backups(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Apikeys(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Permissions(cmd) => cmd.dispatch(ctx).await,
            ListCmd::ServersPresets(cmd) => cmd.dispatch(ctx).await,
            ListCmd::Example(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for CreateCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            CreateCmd::Organization(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Project(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Deployment(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Group(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Role(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Cacertificate(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Ipwhitelist(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Apikey(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Backup(cmd) => cmd.dispatch(ctx).await,
            CreateCmd::Example(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for UpdateCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            UpdateCmd::Organization(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Project(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Deployment(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Group(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Role(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Cacertificate(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Ipwhitelist(cmd) => cmd.dispatch(ctx).await,
            UpdateCmd::Policy(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for DeleteCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            DeleteCmd::Organization(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Project(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Deployment(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Group(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Role(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Cacertificate(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Ipwhitelist(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Apikey(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Backup(cmd) => cmd.dispatch(ctx).await,
            DeleteCmd::Example(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for AddCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            AddCmd::Group(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for AcceptCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            AcceptCmd::Organization(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

impl Dispatch for RejectCmd {
    async fn dispatch(self, ctx: RuntimeContext) -> OasisCliResult<()> {
        match self {
            RejectCmd::Organization(cmd) => cmd.dispatch(ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    // The intent of these tests is to check the integrity of the whole
    // command tree: global options, verb routing and the environment
    // fallbacks of the scope flags.

    use clap::CommandFactory;

    use super::*;

    // verify_cmd_structure runs a baseline clap debug_assert()
    // over the full command tree.
    #[test]
    fn verify_cmd_structure() {
        CliOptions::command().debug_assert();
    }

    // parse_global_defaults ensures endpoint and format defaults.
    #[test]
    fn parse_global_defaults() {
        let opts = CliOptions::try_parse_from(["oasisctl", "list", "organizations"])
            .expect("should parse list organizations");

        assert_eq!(opts.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(opts.format, OutputFormat::Table);
        assert!(!opts.debug);
        assert!(matches!(
            opts.command,
            CliCommand::List(ListCmd::Organizations(_))
        ));
    }

    // parse_globals_after_subcommand ensures global options are
    // accepted anywhere on the line.
    #[test]
    fn parse_globals_after_subcommand() {
        let opts = CliOptions::try_parse_from([
            "oasisctl",
            "get",
            "deployment",
            "my-deployment",
            "--format",
            "json",
            "--endpoint",
            "api.example.com",
            "--debug",
        ])
        .expect("should parse globals after subcommand");

        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.endpoint, "api.example.com");
        assert!(opts.debug);
        match opts.command {
            CliCommand::Get(GetCmd::Deployment(args)) => {
                assert_eq!(args.id.as_deref(), Some("my-deployment"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    // parse_invalid_format_fails ensures only table, json and
    // yaml are accepted.
    #[test]
    fn parse_invalid_format_fails() {
        let result =
            CliOptions::try_parse_from(["oasisctl", "--format", "xml", "list", "organizations"]);
        assert!(result.is_err(), "should fail with unknown format");
    }

    // parse_get_self ensures the `self` keyword routes to the
    // current user.
    #[test]
    fn parse_get_self() {
        let opts =
            CliOptions::try_parse_from(["oasisctl", "get", "self"]).expect("should parse get self");
        assert!(matches!(opts.command, CliCommand::Get(GetCmd::SelfUser(_))));
    }

    // parse_servers_presets ensures the kebab-case list command.
    #[test]
    fn parse_servers_presets() {
        let opts = CliOptions::try_parse_from(["oasisctl", "list", "servers-presets"])
            .expect("should parse list servers-presets");
        assert!(matches!(
            opts.command,
            CliCommand::List(ListCmd::ServersPresets(_))
        ));
    }

    // parse_nested_verbs ensures multi-word commands route to
    // their leaves.
    #[test]
    fn parse_nested_verbs() {
        let cases: &[&[&str]] = &[
            &["oasisctl", "list", "organization", "members"],
            &["oasisctl", "list", "group", "members", "-g", "g1"],
            &["oasisctl", "get", "effective", "permissions", "-u", "/o/1"],
            &["oasisctl", "add", "group", "members", "-u", "a@b.c"],
            &["oasisctl", "accept", "organization", "invite", "-i", "inv"],
            &["oasisctl", "reject", "organization", "invite", "-i", "inv"],
            &["oasisctl", "update", "policy", "add", "binding", "-r", "r1"],
            &["oasisctl", "list", "example", "datasets"],
            &["oasisctl", "completion", "bash"],
            &["oasisctl", "generate-docs"],
            &["oasisctl", "version", "--show-api"],
        ];
        for args in cases {
            CliOptions::try_parse_from(args.iter())
                .unwrap_or_else(|e| panic!("should parse {args:?}: {e}"));
        }
    }

    // parse_missing_verb_fails ensures a command is required.
    #[test]
    fn parse_missing_verb_fails() {
        let result = CliOptions::try_parse_from(["oasisctl"]);
        assert!(result.is_err(), "should fail without a command");
    }
}

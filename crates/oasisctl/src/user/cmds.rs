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

use std::collections::HashMap;

use rpc::cli::{OasisCliError, OasisCliResult};
use rpc::protos::iam::User;

use super::args::GetSelf;
use crate::cfg::runtime::RuntimeContext;
use crate::output::{Render, fmt_time};
use crate::rpc::ApiClient;

impl Render for User {
    const COLUMNS: &'static [&'static str] = &["Id", "Name", "Email", "Created At"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            fmt_time(&self.created_at),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Id", self.id.clone()),
            ("Name", self.name.clone()),
            ("Given Name", self.given_name.clone()),
            ("Family Name", self.family_name.clone()),
            ("Email", self.email.clone()),
            ("Created At", fmt_time(&self.created_at)),
        ]
    }
}

pub async fn get_self(_args: GetSelf, ctx: &mut RuntimeContext) -> OasisCliResult<()> {
    let user = ctx.api_client.0.get_this_user(()).await?;
    ctx.write_item(&user).await
}

/// Fetches the users with the given identifiers, keyed by email address.
pub async fn users_by_email<'a>(
    api: &ApiClient,
    user_ids: impl IntoIterator<Item = &'a str>,
) -> OasisCliResult<HashMap<String, User>> {
    let mut users = HashMap::new();
    for user_id in user_ids {
        let user = api.0.get_user(user_id).await?;
        users.insert(user.email.clone(), user);
    }
    Ok(users)
}

/// Maps email addresses to user identifiers. Every address must belong to
/// one of `users`, which describe the members of `scope`.
pub fn resolve_user_emails(
    users: &HashMap<String, User>,
    emails: &[String],
    scope: &str,
) -> OasisCliResult<Vec<String>> {
    emails
        .iter()
        .map(|email| {
            users.get(email).map(|user| user.id.clone()).ok_or_else(|| {
                OasisCliError::GenericError(format!(
                    "User with email '{email}' is not a member of {scope}"
                ))
            })
        })
        .collect()
}

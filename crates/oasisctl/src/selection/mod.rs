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

//! Resolution of user supplied identifiers into platform entities.
//!
//! Every command that works on an existing entity accepts an identifier, a
//! name or a URL for it, or nothing at all when the caller only has access
//! to a single one. [select] implements that once for every resource type;
//! [lookups] provides the per-resource [Lookup] implementations backed by
//! the API.

pub mod lookups;


use rpc::cli::{OasisCliError, OasisCliResult};

pub use self::lookups::*;

/// An entity that can be picked by identifier, name or URL.
pub trait Selectable {
    /// Singular noun used in messages, e.g. "deployment".
    const KIND: &'static str;
    /// Plural noun used in messages, e.g. "deployments".
    const KIND_PLURAL: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// URL of the entity, empty if the entity has none.
    fn url(&self) -> &str {
        ""
    }

    fn matches(&self, needle: &str) -> bool {
        self.name() == needle || (!self.url().is_empty() && self.url() == needle)
    }
}

/// Access to the entities of one type within a single scope, e.g. "the
/// projects of organization X".
#[async_trait::async_trait]
pub trait Lookup<T>: Send + Sync {
    async fn get(&self, id: &str) -> OasisCliResult<T>;

    /// Lists all entities in scope. Scopes whose parent was not given
    /// explicitly resolve it here, so a successful `get` never pays for it.
    async fn list(&self) -> OasisCliResult<Vec<T>>;
}

/// Resolves `id` into an entity.
///
/// With an identifier, the entity is fetched directly; if the platform does
/// not know that identifier the entities in scope are searched by name and
/// URL instead. Without one, the single entity in scope is returned.
pub async fn select<T, L>(lookup: &L, id: Option<&str>) -> OasisCliResult<T>
where
    T: Selectable + Send,
    L: Lookup<T> + ?Sized,
{
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        let mut items = lookup.list().await?;
        if items.len() != 1 {
            tracing::debug!(
                kind = T::KIND,
                count = items.len(),
                "No unique entity in scope"
            );
            return Err(OasisCliError::NotUnique {
                kind_plural: T::KIND_PLURAL,
                count: items.len(),
            });
        }
        let item = items.remove(0);
        tracing::debug!(kind = T::KIND, id = item.id(), "Selected the only entity in scope");
        return Ok(item);
    };

    let err = match lookup.get(id).await {
        Ok(item) => return Ok(item),
        Err(err) => err,
    };
    if !err.is_not_found() {
        tracing::debug!(kind = T::KIND, id, error = %err, "Failed to get entity");
        return Err(err);
    }

    tracing::debug!(kind = T::KIND, id, "Not found by id, looking up by name or URL");
    match lookup.list().await {
        Ok(items) => match items.into_iter().find(|item| item.matches(id)) {
            Some(item) => {
                tracing::debug!(
                    kind = T::KIND,
                    needle = id,
                    id = item.id(),
                    "Found by name or URL"
                );
                Ok(item)
            }
            None => Err(err),
        },
        Err(list_err) => {
            tracing::debug!(kind = T::KIND, error = %list_err, "Failed to list entities");
            Err(err)
        }
    }
}

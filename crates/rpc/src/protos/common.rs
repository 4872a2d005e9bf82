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

// arangodb.cloud.common.v1

#[derive(Clone, Copy, PartialEq, prost::Message, serde::Serialize)]
pub struct Empty {}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct IdOptions {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct UrlOptions {
    #[prost(string, tag = "1")]
    pub url: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct ListOptions {
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    #[prost(int64, tag = "2")]
    pub page: i64,
    #[prost(string, tag = "3")]
    pub context_id: String,
}

#[derive(Clone, PartialEq, prost::Message, serde::Serialize)]
pub struct Version {
    #[prost(int32, tag = "1")]
    pub major: i32,
    #[prost(int32, tag = "2")]
    pub minor: i32,
    #[prost(int32, tag = "3")]
    pub patch: i32,
}

impl From<()> for Empty {
    fn from(_: ()) -> Self {
        Self {}
    }
}

impl From<String> for IdOptions {
    fn from(id: String) -> Self {
        Self { id }
    }
}

impl From<&str> for IdOptions {
    fn from(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl From<String> for UrlOptions {
    fn from(url: String) -> Self {
        Self { url }
    }
}

impl From<&str> for UrlOptions {
    fn from(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl ListOptions {
    /// Options listing everything inside the given context (organization,
    /// project, group, ...).
    pub fn in_context(context_id: impl Into<String>) -> Self {
        Self {
            context_id: context_id.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

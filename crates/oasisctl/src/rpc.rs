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

use rpc::OasisApiClient;

/// Handle on the platform API shared by all commands.
#[derive(Clone, Debug)]
pub struct ApiClient(pub OasisApiClient);

impl ApiClient {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self(OasisApiClient::new(endpoint, token))
    }
}

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

//! Client side of the Oasis platform gRPC API: message types, a lazily
//! connecting API client and the error type shared by CLI tools.

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod errors;
pub mod protos;

pub use client::{ConnectionProvider, OasisApiClient, OasisConnectionProvider, RetryConfig};

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

//! Message types of the Oasis platform API.
//!
//! The schema is owned by the platform; these mirror the subset of the
//! `arangodb.cloud.*.v1` packages the CLI talks to. Field tags must match the
//! published schema.

/// Declares the fully-qualified gRPC paths of a service's methods as
/// `&'static str` constants, ready for `PathAndQuery::from_static`.
macro_rules! service_methods {
    ($service:literal { $($name:ident => $method:literal,)* }) => {
        pub mod service {
            pub const NAME: &str = $service;
            $(pub const $name: &str = concat!("/", $service, "/", $method);)*
        }
    };
}

pub mod backup;
pub mod common;
pub mod crypto;
pub mod data;
pub mod example;
pub mod iam;
pub mod platform;
pub mod resourcemanager;
pub mod security;

/// Serde helpers for `google.protobuf.Timestamp` fields, which are printed
/// as RFC 3339 strings in JSON and YAML output.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use prost_types::Timestamp;
    use serde::Serializer;

    pub fn to_datetime(ts: &Timestamp) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(ts.nanos).ok()?;
        DateTime::from_timestamp(ts.seconds, nanos)
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Timestamp {
        Timestamp {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }

    pub fn to_rfc3339(ts: &Timestamp) -> Option<String> {
        to_datetime(ts).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn serialize<S: Serializer>(ts: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match ts.as_ref().and_then(to_rfc3339) {
            Some(formatted) => s.serialize_some(&formatted),
            None => s.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use prost_types::Timestamp;

    use super::timestamp;

    #[test]
    fn timestamp_formats_as_rfc3339() {
        let ts = Timestamp {
            seconds: 1_577_836_800,
            nanos: 0,
        };
        assert_eq!(
            timestamp::to_rfc3339(&ts).as_deref(),
            Some("2020-01-01T00:00:00Z")
        );
    }

    #[test]
    fn timestamp_converts_from_datetime() {
        let dt = chrono::DateTime::parse_from_rfc3339("2020-01-01T00:00:01.5Z")
            .expect("valid date")
            .with_timezone(&chrono::Utc);
        let ts = timestamp::from_datetime(&dt);
        assert_eq!(ts.seconds, 1_577_836_801);
        assert_eq!(ts.nanos, 500_000_000);
    }

    #[test]
    fn timestamp_with_negative_nanos_is_rejected() {
        let ts = Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert!(timestamp::to_datetime(&ts).is_none());
    }

    #[test]
    fn method_paths_are_fully_qualified() {
        assert_eq!(
            super::resourcemanager::service::GET_ORGANIZATION,
            "/arangodb.cloud.resourcemanager.v1.ResourceManagerService/GetOrganization"
        );
        assert_eq!(
            super::iam::service::NAME,
            "arangodb.cloud.iam.v1.IAMService"
        );
    }
}

/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! JaaS (Jitsi as a Service) JWT claims and client settings.
//!
//! JaaS is the multi-tenant hosted variant of the meeting provider. It
//! requires RSA-SHA256-signed, tenant-scoped tokens with fixed `iss`/`aud`
//! values and string-typed feature entitlements. The `8x8.vc` backend parses
//! these tokens unmodified, so wire names must not change.

use serde::{Deserialize, Serialize};

/// Fixed issuer claim required by JaaS.
pub const JAAS_ISSUER: &str = "chat";
/// Fixed audience claim required by JaaS.
pub const JAAS_AUDIENCE: &str = "jitsi";

/// JWT payload for a JaaS meeting token.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JaasClaims {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub aud: String,

    /// Subject: the JaaS tenant application ID (`vpaas-magic-cookie-…`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iss: String,

    /// Room scope: `"*"` grants the whole tenant, otherwise a specific room.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,

    /// Expiration time (Unix timestamp, seconds).
    #[serde(default)]
    pub exp: i64,

    /// Not-before time (Unix timestamp, seconds).
    #[serde(default)]
    pub nbf: i64,

    #[serde(default)]
    pub context: JaasContext,
}

/// Nested `context` claim: user identity plus feature entitlements.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JaasContext {
    #[serde(default)]
    pub user: JaasUser,
    #[serde(default)]
    pub features: JaasFeatures,
}

/// Identity fields shown to other participants, plus the moderator flag.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JaasUser {
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// `"true"` or `"false"`; JaaS expects a string, not a boolean.
    #[serde(
        rename = "moderator",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub moderator: String,
}

/// Feature entitlements, each `"true"` or `"false"` as a string.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JaasFeatures {
    #[serde(default)]
    pub livestreaming: String,
    #[serde(default)]
    pub recording: String,
    #[serde(rename = "outbound-call", default)]
    pub outbound_call: String,
    #[serde(default)]
    pub transcription: String,
}

impl JaasFeatures {
    /// All four entitlements set to the same string flag.
    pub fn uniform(flag: &str) -> Self {
        Self {
            livestreaming: flag.to_string(),
            recording: flag.to_string(),
            outbound_call: flag.to_string(),
            transcription: flag.to_string(),
        }
    }
}

/// Settings handed to the embedded JaaS web client: the token to present
/// and the room path it asked about, verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JaasSettings {
    #[serde(rename = "jaasJwt")]
    pub jwt: String,
    #[serde(rename = "jaasRoom")]
    pub room: String,
}

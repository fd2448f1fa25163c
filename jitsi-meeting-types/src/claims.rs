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

//! Standard-provider JWT claims (jitsi-web-token shape).
//!
//! A self-hosted Jitsi deployment with JWT authentication enabled expects an
//! HMAC-SHA256-signed token whose payload carries the room name and a nested
//! `context` describing the joining user. The engine signs the token; the
//! meeting server validates the signature and extracts the claims unmodified,
//! so the wire names here must match what Jitsi's token plugin reads.

use serde::{Deserialize, Serialize};

/// JWT payload for a standard-provider meeting token.
///
/// # Example payload
///
/// ```json
/// {
///   "iss": "my-app-id",
///   "aud": ["my-app-id"],
///   "sub": "meet.example.com",
///   "exp": 1707004800,
///   "room": "Team-Sync-abcdefghijklmnopqrst",
///   "context": {
///     "user": {
///       "avatar": "https://chat.example.com/api/v4/users/u1/image?_=0",
///       "name": "Alice",
///       "email": "",
///       "id": "u1"
///     },
///     "group": ""
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    /// Issuer: the application ID configured on the meeting server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iss: String,

    /// Audience: the application ID, as a single-element list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aud: Vec<String>,

    /// Subject: the meeting provider hostname.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,

    /// The room this token grants access to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room: String,

    /// User identity and group, displayed by the meeting client.
    #[serde(default)]
    pub context: Context,
}

/// Nested `context` claim: the user plus an optional group label.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Context {
    #[serde(default)]
    pub user: UserClaims,
    #[serde(default)]
    pub group: String,
}

/// Identity fields shown to other meeting participants.
///
/// `name` and `email` must already be sanitized against the platform's
/// privacy settings before they land here.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UserClaims {
    /// Cache-busting avatar image URL (not binary data).
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub id: String,
}

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

//! Structured meeting announcement handed to the chat platform.

use serde::{Deserialize, Serialize};

/// Everything the messaging collaborator needs to post a "meeting started"
/// message and later look the meeting up again.
///
/// This is a typed contract, not a loose props bag: the chat-side adapter
/// serializes it into whatever its post format requires at the boundary.
/// `jwt_meeting_valid_until == 0` means no expiry applies (no token was
/// minted for this meeting).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingAnnouncement {
    /// Requesting user (the post author).
    pub user_id: String,
    /// Channel the meeting was started in.
    pub channel_id: String,
    /// Thread root, empty when not threaded.
    #[serde(default)]
    pub root_id: String,

    /// Full room identifier (JaaS-prefixed when applicable).
    pub meeting_id: String,
    /// Room identifier without the tenant prefix, for display.
    pub meeting_id_label: String,
    /// Join link without the token, safe to persist and re-share.
    pub meeting_link: String,
    /// Full join URL including token and display-name fragment.
    pub join_url: String,

    /// Whether the meeting is JWT-protected.
    pub jwt_meeting: bool,
    /// The signed token, for client-side reuse. Empty when not protected.
    #[serde(default)]
    pub meeting_jwt: String,
    /// Unix timestamp the link stops working, 0 when no expiry applies.
    #[serde(default)]
    pub jwt_meeting_valid_until: i64,

    /// Whether this is the requester's personal (permanent) room.
    pub meeting_personal: bool,
    /// Topic as resolved by the engine; may be empty.
    #[serde(default)]
    pub meeting_topic: String,
    /// Localized fallback topic ("Jitsi Meeting" / "JaaS Meeting").
    pub default_meeting_topic: String,
    /// Whether the JaaS provider is in use.
    pub jaas_meeting: bool,
}

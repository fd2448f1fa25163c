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

//! Chat-platform collaborator contract.
//!
//! The engine never talks to the messaging platform directly; everything it
//! needs (lookups, privacy settings, post creation, the KV store) comes
//! through [`Platform`]. Production code wires this to the host plugin API;
//! tests use an in-memory fake.

use jitsi_meeting_types::MeetingAnnouncement;

use crate::error::Error;

/// A user record as the platform stores it, before any privacy redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Unix timestamp of the last avatar change, for cache busting.
    pub last_picture_update: i64,
}

impl UserProfile {
    /// Display form shown to other participants: nickname, else full
    /// name, else username.
    pub fn display_name(&self) -> String {
        if !self.nickname.is_empty() {
            return self.nickname.clone();
        }
        let full = self.full_name();
        if !full.is_empty() {
            return full;
        }
        self.username.clone()
    }

    /// "First Last", tolerating either half being blank.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamProfile {
    pub name: String,
}

/// Channel kinds, matching the platform's single-letter wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    /// One-to-one conversation (`D`).
    Direct,
    /// Ad-hoc multi-user conversation (`G`).
    Group,
    /// Public channel (`O`).
    Open,
    /// Invite-only channel (`P`).
    Private,
}

impl ChannelType {
    /// Direct and group conversations get personal meeting names.
    pub fn is_conversation(self) -> bool {
        matches!(self, ChannelType::Direct | ChannelType::Group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelProfile {
    pub id: String,
    pub channel_type: ChannelType,
    pub name: String,
    pub display_name: String,
    pub team_id: String,
}

/// Install-wide privacy switches, owned by the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacySettings {
    pub show_full_name: bool,
    pub show_email_address: bool,
}

/// Everything the engine consumes from its host.
///
/// Failures map to [`Error::Collaborator`] and propagate unchanged; these
/// are platform-internal calls, not flaky network calls warranting backoff.
pub trait Platform {
    fn lookup_user(&self, user_id: &str) -> Result<UserProfile, Error>;

    fn lookup_team(&self, team_id: &str) -> Result<TeamProfile, Error>;

    fn lookup_channel(&self, channel_id: &str) -> Result<ChannelProfile, Error>;

    fn privacy_settings(&self) -> PrivacySettings;

    /// Base URL of the chat installation, e.g. `https://chat.example.com`.
    fn site_url(&self) -> String;

    /// Post the meeting announcement, returning the created post ID.
    fn create_announcement(&self, announcement: &MeetingAnnouncement) -> Result<String, Error>;

    fn kv_get(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;

    fn kv_set(&self, key: &str, value: &[u8]) -> Result<(), Error>;
}

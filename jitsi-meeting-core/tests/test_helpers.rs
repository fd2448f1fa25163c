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

//! Shared test helpers for the meeting engine integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use jitsi_meeting_core::{
    ChannelProfile, ChannelType, Error, MeetingEngine, Platform, PluginConfig, PrivacySettings,
    TeamProfile, UserProfile,
};
use jitsi_meeting_types::{MeetingAnnouncement, NamingScheme};

pub const TEST_SECRET: &str = "s3cr3t";
pub const TEST_SITE_URL: &str = "https://chat.example.com";
pub const TEST_JAAS_APP_ID: &str = "vpaas-magic-cookie-0123456789abcdef0123456789abcdef";

/// In-memory chat platform: records announcements, serves lookups from
/// fixed fixtures, and backs the KV store with a map.
pub struct FakePlatform {
    pub privacy: PrivacySettings,
    pub teams: HashMap<String, TeamProfile>,
    pub channels: HashMap<String, ChannelProfile>,
    pub fail_team_lookup: bool,
    pub announcements: Mutex<Vec<MeetingAnnouncement>>,
    pub kv: Mutex<HashMap<String, Vec<u8>>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        let mut teams = HashMap::new();
        teams.insert(
            "team1".to_string(),
            TeamProfile {
                name: "core".to_string(),
            },
        );
        let mut channels = HashMap::new();
        channels.insert("dm1".to_string(), dm_channel());
        channels.insert("ch1".to_string(), open_channel());
        Self {
            privacy: PrivacySettings::default(),
            teams,
            channels,
            fail_team_lookup: false,
            announcements: Mutex::new(Vec::new()),
            kv: Mutex::new(HashMap::new()),
        }
    }
}

impl FakePlatform {
    pub fn last_announcement(&self) -> MeetingAnnouncement {
        self.announcements
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("an announcement should have been posted")
    }

    pub fn announcement_count(&self) -> usize {
        self.announcements.lock().unwrap().len()
    }
}

impl Platform for FakePlatform {
    fn lookup_user(&self, user_id: &str) -> Result<UserProfile, Error> {
        Ok(UserProfile {
            id: user_id.to_string(),
            username: "alice".to_string(),
            ..UserProfile::default()
        })
    }

    fn lookup_team(&self, team_id: &str) -> Result<TeamProfile, Error> {
        if self.fail_team_lookup {
            return Err(Error::collaborator("team lookup failed"));
        }
        self.teams
            .get(team_id)
            .cloned()
            .ok_or_else(|| Error::collaborator(format!("unknown team: {team_id}")))
    }

    fn lookup_channel(&self, channel_id: &str) -> Result<ChannelProfile, Error> {
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| Error::collaborator(format!("unknown channel: {channel_id}")))
    }

    fn privacy_settings(&self) -> PrivacySettings {
        self.privacy
    }

    fn site_url(&self) -> String {
        TEST_SITE_URL.to_string()
    }

    fn create_announcement(&self, announcement: &MeetingAnnouncement) -> Result<String, Error> {
        let mut posts = self.announcements.lock().unwrap();
        posts.push(announcement.clone());
        Ok(format!("post-{}", posts.len()))
    }

    fn kv_get(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.kv.lock().unwrap().get(key).cloned())
    }

    fn kv_set(&self, key: &str, value: &[u8]) -> Result<(), Error> {
        self.kv
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

pub fn alice() -> UserProfile {
    UserProfile {
        id: "user-a".to_string(),
        username: "alice".to_string(),
        nickname: String::new(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        email: "alice@example.com".to_string(),
        last_picture_update: 1700000000,
    }
}

pub fn bob() -> UserProfile {
    UserProfile {
        id: "user-b".to_string(),
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        ..UserProfile::default()
    }
}

pub fn dm_channel() -> ChannelProfile {
    ChannelProfile {
        id: "dm1".to_string(),
        channel_type: ChannelType::Direct,
        name: "alice__bob".to_string(),
        display_name: String::new(),
        team_id: String::new(),
    }
}

pub fn open_channel() -> ChannelProfile {
    ChannelProfile {
        id: "ch1".to_string(),
        channel_type: ChannelType::Open,
        name: "town-square".to_string(),
        display_name: "Town Square".to_string(),
        team_id: "team1".to_string(),
    }
}

pub fn anonymous_config() -> PluginConfig {
    PluginConfig::default()
}

pub fn jwt_config() -> PluginConfig {
    PluginConfig {
        jwt_enabled: true,
        app_id: "test-app-id".to_string(),
        app_secret: TEST_SECRET.to_string(),
        ..PluginConfig::default()
    }
}

pub fn jaas_config(private_key_pem: &str) -> PluginConfig {
    PluginConfig {
        use_jaas: true,
        jaas_app_id: TEST_JAAS_APP_ID.to_string(),
        jaas_api_key: "test-api-key".to_string(),
        jaas_private_key: private_key_pem.to_string(),
        ..PluginConfig::default()
    }
}

pub fn scheme_config(scheme: NamingScheme) -> PluginConfig {
    PluginConfig {
        naming_scheme: scheme,
        ..PluginConfig::default()
    }
}

/// A fresh PKCS8 PEM-encoded RSA private key for JaaS signing tests.
pub fn test_rsa_private_key_pem() -> String {
    use rsa::pkcs8::EncodePrivateKey;
    use rsa::RsaPrivateKey;

    let mut rng = rand::thread_rng();
    RsaPrivateKey::new(&mut rng, 2048)
        .expect("keygen should succeed")
        .to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)
        .expect("pem encoding should succeed")
        .to_string()
}

pub fn engine(config: PluginConfig) -> MeetingEngine<FakePlatform> {
    MeetingEngine::new(FakePlatform::default(), config).expect("config should validate")
}

/// Pull the `jwt` query parameter out of a join URL.
pub fn extract_jwt(url: &str) -> String {
    let start = url.find("jwt=").expect("join URL should carry a jwt") + 4;
    let rest = &url[start..];
    let end = rest.find(['&', '#']).unwrap_or(rest.len());
    rest[..end].to_string()
}

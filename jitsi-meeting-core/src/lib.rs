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

//! Meeting-link and token issuance engine for the Jitsi chat plugin.
//!
//! This crate is the substance behind the plugin's slash command and HTTP
//! handlers: it derives meeting identifiers under a configurable naming
//! policy, builds provider-specific join URLs, and mints and re-signs the
//! JWTs that providers requiring authenticated access expect (HMAC-SHA256
//! for self-hosted Jitsi, RSA-SHA256 for JaaS tenants), carrying sanitized
//! user identity and moderation claims.
//!
//! The chat platform itself is reached only through the [`platform::Platform`]
//! trait; command parsing, HTTP routing and message rendering live with the
//! host plugin, not here.

pub mod claims;
pub mod config;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod naming;
pub mod platform;
pub mod token;
pub mod urls;

pub use config::{PluginConfig, ProviderMode};
pub use engine::{MeetingEngine, MeetingNameOption};
pub use error::Error;
pub use platform::{
    ChannelProfile, ChannelType, Platform, PrivacySettings, TeamProfile, UserProfile,
};

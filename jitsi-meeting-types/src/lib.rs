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

//! Shared types for the Jitsi meeting engine.
//!
//! This crate defines the JWT claim shapes accepted by Jitsi and JaaS
//! deployments, the settings payload returned to the embedded JaaS client,
//! and the structured meeting announcement handed to the chat platform.
//! It is intentionally framework-agnostic: serde only, no crypto, no HTTP.

pub mod announcement;
pub mod claims;
pub mod jaas;
pub mod requests;
pub mod user_config;

pub use announcement::MeetingAnnouncement;
pub use claims::{Claims, Context, UserClaims};
pub use jaas::{JaasClaims, JaasContext, JaasFeatures, JaasSettings, JaasUser};
pub use requests::EnrichMeetingJwtRequest;
pub use user_config::{NamingScheme, UserConfig};

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

//! Claim construction with privacy redaction.
//!
//! Redaction happens first, on a copy: the sanitized user, never the
//! original record, feeds into display-name derivation and the claims.

use chrono::Utc;
use jitsi_meeting_types::{
    jaas::{JAAS_AUDIENCE, JAAS_ISSUER},
    Claims, JaasClaims, JaasFeatures, JaasUser, UserClaims,
};

use crate::platform::{PrivacySettings, UserProfile};

/// JaaS tokens are valid for two hours from issuance.
pub const JAAS_TOKEN_TTL_SECS: i64 = 7200;

/// A user record with privacy-restricted fields already blanked.
///
/// Constructing one is the only way claim builders accept identity input,
/// so an unsanitized profile cannot reach a token by accident.
#[derive(Debug, Clone)]
pub struct SanitizedUser(UserProfile);

impl SanitizedUser {
    pub fn new(user: &UserProfile, privacy: &PrivacySettings) -> Self {
        let mut copy = user.clone();
        if !privacy.show_full_name {
            copy.first_name = String::new();
            copy.last_name = String::new();
        }
        if !privacy.show_email_address {
            copy.email = String::new();
        }
        Self(copy)
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn display_name(&self) -> String {
        self.0.display_name()
    }

    pub fn last_picture_update(&self) -> i64 {
        self.0.last_picture_update
    }
}

/// Cache-busting avatar image endpoint reference (not a binary fetch).
pub fn avatar_url(site_url: &str, user_id: &str, last_picture_update: i64) -> String {
    format!(
        "{}/api/v4/users/{}/image?_={}",
        site_url.trim_end_matches('/'),
        user_id,
        last_picture_update
    )
}

/// Identity context for a standard-provider token.
pub fn user_claims(site_url: &str, user: &SanitizedUser) -> UserClaims {
    UserClaims {
        avatar: avatar_url(site_url, user.id(), user.last_picture_update()),
        name: user.display_name(),
        email: user.email().to_string(),
        id: user.id().to_string(),
    }
}

/// Identity context for a JaaS token, moderator flag included.
pub fn jaas_user_claims(site_url: &str, user: &SanitizedUser, moderator: &str) -> JaasUser {
    JaasUser {
        avatar: avatar_url(site_url, user.id(), user.last_picture_update()),
        name: user.display_name(),
        email: user.email().to_string(),
        id: user.id().to_string(),
        moderator: moderator.to_string(),
    }
}

/// Claims for a freshly started standard-provider meeting. Identity context
/// stays empty here; it is filled in when a client enriches the token.
pub fn standard_meeting_claims(
    app_id: &str,
    provider_host: &str,
    room: &str,
    expires_at: i64,
) -> Claims {
    Claims {
        iss: app_id.to_string(),
        aud: vec![app_id.to_string()],
        sub: provider_host.to_string(),
        exp: expires_at,
        room: room.to_string(),
        context: Default::default(),
    }
}

/// Who a fresh JaaS token is being minted for.
pub enum JaasIdentity<'a> {
    /// An authenticated chat user: moderator, fully entitled, real
    /// email and full name.
    User(&'a UserProfile),
    /// An anonymous guest: no identity, no entitlements.
    Guest(&'a str),
}

/// Claims for a brand-new JaaS token, tenant-scoped (`room = "*"`).
pub fn fresh_jaas_claims(tenant_app_id: &str, identity: JaasIdentity<'_>) -> JaasClaims {
    let (permission, user_id, email, name) = match identity {
        JaasIdentity::User(user) => ("true", user.id.clone(), user.email.clone(), user.full_name()),
        JaasIdentity::Guest(guest_id) => ("false", guest_id.to_string(), String::new(), String::new()),
    };

    let now = Utc::now().timestamp();
    let mut claims = JaasClaims {
        iss: JAAS_ISSUER.to_string(),
        aud: JAAS_AUDIENCE.to_string(),
        sub: tenant_app_id.to_string(),
        room: "*".to_string(),
        exp: now + JAAS_TOKEN_TTL_SECS,
        nbf: now,
        ..Default::default()
    };
    claims.context.features = JaasFeatures::uniform(permission);
    claims.context.user.id = user_id;
    claims.context.user.email = email;
    claims.context.user.name = name;
    claims.context.user.moderator = permission.to_string();
    claims
}

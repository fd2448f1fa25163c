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

//! Token enrichment: re-signing a previously issued token with refreshed,
//! re-sanitized identity claims.
//!
//! Identity from the presented token is never trusted: it is replaced
//! wholesale with the freshly sanitized requester. Only non-identity claims
//! survive: the `group` label (standard provider) or the feature
//! entitlements and room scope (JaaS).

use jitsi_meeting_types::{EnrichMeetingJwtRequest, JaasClaims, JaasSettings};

use crate::claims::{self, JaasIdentity, SanitizedUser};
use crate::config::ProviderMode;
use crate::engine::MeetingEngine;
use crate::error::Error;
use crate::platform::{Platform, UserProfile};
use crate::token;

impl<P: Platform> MeetingEngine<P> {
    /// Overlay fresh sanitized identity onto a presented token and re-sign.
    ///
    /// On the standard provider the presented token must verify against
    /// this install's secret; there is no fallback, the token was issued
    /// here. On JaaS the token is parsed (the hosted backend vetted it)
    /// and a parse failure is fatal to the call.
    pub fn update_jwt_user_info(&self, jwt: &str, user: &UserProfile) -> Result<String, Error> {
        if jwt.is_empty() {
            return Err(Error::MissingToken);
        }

        let sanitized = SanitizedUser::new(user, &self.platform().privacy_settings());
        let site_url = self.platform().site_url();

        match self.config().provider_mode() {
            ProviderMode::Jaas {
                api_key,
                private_key,
                ..
            } => {
                let mut parsed: JaasClaims = token::parse_claims_unverified(jwt)?;
                parsed.context.user = claims::jaas_user_claims(&site_url, &sanitized, "true");
                token::sign_jaas(api_key, private_key, &parsed)
            }
            ProviderMode::Jwt { app_secret, .. } => {
                let mut parsed = token::verify_standard(app_secret, jwt)?;
                parsed.context.user = claims::user_claims(&site_url, &sanitized);
                token::sign_standard(app_secret, &parsed)
            }
            ProviderMode::Anonymous { .. } => {
                Err(Error::config("JWT authentication is not enabled"))
            }
        }
    }

    /// Handler-facing wrapper: resolve the session user through the
    /// platform and enrich the token carried in the request body.
    pub fn enrich_meeting_jwt(
        &self,
        request: &EnrichMeetingJwtRequest,
        user_id: &str,
    ) -> Result<String, Error> {
        let user = self.platform().lookup_user(user_id)?;
        self.update_jwt_user_info(&request.jwt, &user)
    }

    /// Resolve the token the embedded JaaS client should present for
    /// `room_path`.
    ///
    /// An authenticated caller keeps a token that parses and belongs to
    /// them; a token belonging to someone else is rejected outright; an
    /// unparseable token is replaced with a freshly minted one. Guests
    /// always get a fresh, unentitled token under a generated identity.
    pub fn get_jaas_settings(
        &self,
        jwt: &str,
        room_path: &str,
        user: Option<&UserProfile>,
    ) -> Result<JaasSettings, Error> {
        if !matches!(self.config().provider_mode(), ProviderMode::Jaas { .. }) {
            return Err(Error::config("JaaS is not enabled"));
        }

        let jwt = match user {
            Some(user) => match token::parse_claims_unverified::<JaasClaims>(jwt) {
                Ok(parsed) => {
                    if parsed.context.user.id != user.id {
                        tracing::warn!(
                            user_id = %user.id,
                            "presented token belongs to a different user"
                        );
                        return Err(Error::NotAuthorized);
                    }
                    jwt.to_string()
                }
                Err(err) => {
                    tracing::warn!("presented token unusable ({err}), minting a fresh one");
                    self.sign_fresh_jaas_token(JaasIdentity::User(user))?
                }
            },
            None => {
                let guest_id = format!("{}-guest", uuid::Uuid::new_v4());
                self.sign_fresh_jaas_token(JaasIdentity::Guest(&guest_id))?
            }
        };

        Ok(JaasSettings {
            jwt,
            room: room_path.to_string(),
        })
    }

    fn sign_fresh_jaas_token(&self, identity: JaasIdentity<'_>) -> Result<String, Error> {
        let ProviderMode::Jaas {
            app_id,
            api_key,
            private_key,
        } = self.config().provider_mode()
        else {
            return Err(Error::config("JaaS is not enabled"));
        };

        let claims = claims::fresh_jaas_claims(app_id, identity);
        token::sign_jaas(api_key, private_key, &claims)
    }
}

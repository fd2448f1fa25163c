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

//! Install-wide plugin configuration.
//!
//! The engine receives an immutable configuration snapshot at construction
//! time; there is no locking in here. The layer that watches for
//! configuration changes builds a fresh snapshot and a fresh engine.

use serde::Deserialize;
use url::Url;

use crate::error::Error;
use jitsi_meeting_types::NamingScheme;

/// Public server used when no provider URL is configured.
pub const PUBLIC_JITSI_URL: &str = "https://meet.jit.si";

/// Default meeting-link validity when JWT is enabled and no value is set.
pub const DEFAULT_LINK_VALID_MINUTES: i64 = 30;

/// JaaS meeting links are always valid for two hours.
pub const JAAS_LINK_VALID_MINUTES: i64 = 120;

/// Plugin configuration as entered by the administrator.
///
/// All fields are defaulted so a partially filled admin form deserializes;
/// [`PluginConfig::validate`] decides whether the result is usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Meeting provider base URL; empty selects the public server.
    pub jitsi_url: String,
    /// Whether self-hosted deployments require signed tokens.
    pub jwt_enabled: bool,
    /// Application ID registered with the meeting server.
    pub app_id: String,
    /// Shared HMAC secret for token signing.
    pub app_secret: String,
    /// Meeting-link validity window in minutes; values below 1 fall back
    /// to [`DEFAULT_LINK_VALID_MINUTES`].
    pub link_valid_minutes: i64,
    /// Default naming scheme for users without a per-user preference.
    pub naming_scheme: NamingScheme,
    /// Default for opening meetings embedded in the chat client.
    pub embedded: bool,
    /// Whether the hosted JaaS provider is in use.
    pub use_jaas: bool,
    /// JaaS tenant application ID (`vpaas-magic-cookie-…`).
    pub jaas_app_id: String,
    /// JaaS API key; doubles as the token `kid` header.
    pub jaas_api_key: String,
    /// PEM-encoded RSA private key (PKCS1 or PKCS8).
    pub jaas_private_key: String,
}

/// Provider mode, resolved once per operation instead of re-checking
/// booleans at every branch.
#[derive(Debug, Clone, Copy)]
pub enum ProviderMode<'a> {
    /// Standard provider, no token required.
    Anonymous { base_url: &'a str },
    /// Standard provider with HMAC-signed tokens.
    Jwt {
        base_url: &'a str,
        app_id: &'a str,
        app_secret: &'a str,
        link_valid_minutes: i64,
    },
    /// Hosted JaaS tenant with RSA-signed tokens.
    Jaas {
        app_id: &'a str,
        api_key: &'a str,
        private_key: &'a str,
    },
}

impl PluginConfig {
    /// The configured provider URL, or the public server when unset.
    pub fn jitsi_url(&self) -> &str {
        let url = self.jitsi_url.trim();
        if url.is_empty() {
            PUBLIC_JITSI_URL
        } else {
            url
        }
    }

    pub fn link_valid_minutes(&self) -> i64 {
        if self.link_valid_minutes < 1 {
            DEFAULT_LINK_VALID_MINUTES
        } else {
            self.link_valid_minutes
        }
    }

    /// Eager validation, run before any meeting is created.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.jitsi_url.trim().is_empty() && Url::parse(self.jitsi_url.trim()).is_err() {
            return Err(Error::config("invalid provider URL"));
        }

        if self.use_jaas {
            if self.jaas_app_id.is_empty() {
                return Err(Error::config("no JaaS app ID was provided"));
            }
            if self.jaas_api_key.is_empty() {
                return Err(Error::config("no JaaS API key was provided"));
            }
            if self.jaas_private_key.is_empty() {
                return Err(Error::config("no JaaS private key was provided"));
            }
        } else if self.jwt_enabled {
            if self.app_id.is_empty() {
                return Err(Error::config("no app ID was provided to use with JWT"));
            }
            if self.app_secret.is_empty() {
                return Err(Error::config("no app secret was provided to use with JWT"));
            }
        }

        Ok(())
    }

    /// Resolve the provider booleans into a single mode.
    pub fn provider_mode(&self) -> ProviderMode<'_> {
        if self.use_jaas {
            ProviderMode::Jaas {
                app_id: &self.jaas_app_id,
                api_key: &self.jaas_api_key,
                private_key: &self.jaas_private_key,
            }
        } else if self.jwt_enabled {
            ProviderMode::Jwt {
                base_url: self.jitsi_url(),
                app_id: &self.app_id,
                app_secret: &self.app_secret,
                link_valid_minutes: self.link_valid_minutes(),
            }
        } else {
            ProviderMode::Anonymous {
                base_url: self.jitsi_url(),
            }
        }
    }

    /// Whether any meeting started under this configuration carries a JWT.
    pub fn jwt_meeting(&self) -> bool {
        self.jwt_enabled || self.use_jaas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_falls_back_to_public_server() {
        let config = PluginConfig::default();
        assert_eq!(config.jitsi_url(), PUBLIC_JITSI_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_url_is_rejected() {
        let config = PluginConfig {
            jitsi_url: "not a url at all".to_string(),
            ..PluginConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn jwt_requires_app_id_and_secret() {
        let mut config = PluginConfig {
            jwt_enabled: true,
            ..PluginConfig::default()
        };
        assert!(config.validate().is_err());

        config.app_id = "app".to_string();
        assert!(config.validate().is_err());

        config.app_secret = "s3cr3t".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn jaas_requires_full_key_material() {
        let mut config = PluginConfig {
            use_jaas: true,
            jaas_app_id: "vpaas-magic-cookie-0000".to_string(),
            ..PluginConfig::default()
        };
        assert!(config.validate().is_err());

        config.jaas_api_key = "key".to_string();
        assert!(config.validate().is_err());

        config.jaas_private_key = "pem".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn link_validity_defaults_when_unset() {
        let config = PluginConfig::default();
        assert_eq!(config.link_valid_minutes(), DEFAULT_LINK_VALID_MINUTES);

        let config = PluginConfig {
            link_valid_minutes: 45,
            ..PluginConfig::default()
        };
        assert_eq!(config.link_valid_minutes(), 45);
    }

    #[test]
    fn jaas_takes_precedence_over_jwt_flag() {
        let config = PluginConfig {
            jwt_enabled: true,
            use_jaas: true,
            jaas_app_id: "tenant".to_string(),
            jaas_api_key: "key".to_string(),
            jaas_private_key: "pem".to_string(),
            ..PluginConfig::default()
        };
        assert!(matches!(
            config.provider_mode(),
            ProviderMode::Jaas { app_id: "tenant", .. }
        ));
    }

    #[test]
    fn deserializes_from_partial_admin_settings() {
        let config: PluginConfig =
            serde_json::from_str(r#"{"jitsi_url": "https://meet.example.com"}"#).unwrap();
        assert_eq!(config.jitsi_url(), "https://meet.example.com");
        assert!(!config.jwt_meeting());
    }
}

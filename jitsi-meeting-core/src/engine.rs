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

//! The meeting orchestrator.
//!
//! `start_meeting` is a single synchronous pass: resolve the meeting ID,
//! mint a token when the provider requires one, build the join URL, and
//! hand the announcement to the messaging collaborator. Post creation is
//! the final step, so a failure anywhere leaves no partial state behind.

use chrono::{Duration, Utc};

use jitsi_meeting_types::{MeetingAnnouncement, NamingScheme, UserConfig};

use crate::claims::{self, JaasIdentity};
use crate::config::{PluginConfig, ProviderMode, JAAS_LINK_VALID_MINUTES};
use crate::error::Error;
use crate::naming;
use crate::platform::{ChannelProfile, Platform, UserProfile};
use crate::token;
use crate::urls;

const DEFAULT_TOPIC_JITSI: &str = "Jitsi Meeting";
const DEFAULT_TOPIC_JAAS: &str = "JaaS Meeting";

/// One entry of the "pick a meeting name" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingNameOption {
    pub meeting_id: String,
    pub meeting_topic: String,
    pub personal: bool,
}

/// The meeting-link and token issuance engine.
///
/// Holds an immutable configuration snapshot; when the install-wide
/// configuration changes, the surrounding layer constructs a new engine.
pub struct MeetingEngine<P: Platform> {
    platform: P,
    config: PluginConfig,
}

impl<P: Platform> MeetingEngine<P> {
    /// Build an engine, validating the configuration eagerly so broken
    /// provider settings surface before any meeting is attempted.
    pub fn new(platform: P, config: PluginConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { platform, config })
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Start a meeting and announce it in the channel.
    ///
    /// An explicit `meeting_id` wins; otherwise a supplied topic is
    /// slugified with entropy appended; otherwise the requester's naming
    /// scheme decides. Returns the full meeting identifier
    /// (tenant-prefixed under JaaS).
    pub fn start_meeting(
        &self,
        user: &UserProfile,
        channel: &ChannelProfile,
        meeting_id: Option<&str>,
        topic: &str,
        root_id: &str,
    ) -> Result<String, Error> {
        let mut meeting_topic = topic.to_string();
        let mut personal = false;

        let mut meeting_id = match meeting_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ if !topic.is_empty() => naming::topic_meeting_name(topic),
            _ => {
                let (id, derived_topic, is_personal) = self.scheme_meeting_id(user, channel)?;
                if let Some(derived) = derived_topic {
                    meeting_topic = derived;
                }
                personal = is_personal;
                id
            }
        };

        let meeting_id_label = meeting_id.clone();
        let mode = self.config.provider_mode();

        if let ProviderMode::Jaas { app_id, .. } = mode {
            meeting_id = format!("{app_id}/{meeting_id}");
        }

        let default_meeting_topic = match mode {
            ProviderMode::Jaas { .. } => DEFAULT_TOPIC_JAAS,
            _ => DEFAULT_TOPIC_JITSI,
        };

        let (meeting_link, meeting_jwt, valid_until) = match mode {
            ProviderMode::Anonymous { base_url } => (
                urls::standard_meeting_url(base_url, &meeting_id),
                String::new(),
                0,
            ),
            ProviderMode::Jwt {
                base_url,
                app_id,
                app_secret,
                link_valid_minutes,
            } => {
                let link = urls::standard_meeting_url(base_url, &meeting_id);
                let valid_until = (Utc::now() + Duration::minutes(link_valid_minutes)).timestamp();
                let host = urls::provider_hostname(base_url)?;
                let claims =
                    claims::standard_meeting_claims(app_id, &host, &meeting_id, valid_until);
                let jwt = token::sign_standard(app_secret, &claims)?;
                (link, jwt, valid_until)
            }
            ProviderMode::Jaas {
                app_id,
                api_key,
                private_key,
            } => {
                let link = urls::jaas_meeting_url(&self.platform.site_url(), &meeting_id);
                let valid_until =
                    (Utc::now() + Duration::minutes(JAAS_LINK_VALID_MINUTES)).timestamp();
                let claims = claims::fresh_jaas_claims(app_id, JaasIdentity::User(user));
                let jwt = token::sign_jaas(api_key, private_key, &claims)?;
                (link, jwt, valid_until)
            }
        };

        let mut join_url = meeting_link.clone();
        if !meeting_jwt.is_empty() {
            join_url = urls::with_jwt(&join_url, &meeting_jwt);
        }
        let display_topic = if meeting_topic.is_empty() {
            default_meeting_topic
        } else {
            &meeting_topic
        };
        join_url = urls::with_display_name(&join_url, display_topic);

        let announcement = MeetingAnnouncement {
            user_id: user.id.clone(),
            channel_id: channel.id.clone(),
            root_id: root_id.to_string(),
            meeting_id: meeting_id.clone(),
            meeting_id_label,
            meeting_link,
            join_url,
            jwt_meeting: self.config.jwt_meeting(),
            meeting_jwt,
            jwt_meeting_valid_until: valid_until,
            meeting_personal: personal,
            meeting_topic,
            default_meeting_topic: default_meeting_topic.to_string(),
            jaas_meeting: self.config.use_jaas,
        };

        let post_id = self.platform.create_announcement(&announcement)?;
        self.platform
            .kv_set(&format!("post_{meeting_id}"), post_id.as_bytes())?;

        tracing::info!(meeting_id = %meeting_id, personal, "meeting started");
        Ok(meeting_id)
    }

    /// ID-based entry point for host handlers that carry only session IDs:
    /// resolves the user and channel through the platform first.
    pub fn start_meeting_by_id(
        &self,
        user_id: &str,
        channel_id: &str,
        meeting_id: Option<&str>,
        topic: &str,
        root_id: &str,
    ) -> Result<String, Error> {
        let user = self.platform.lookup_user(user_id)?;
        let channel = self.platform.lookup_channel(channel_id)?;
        self.start_meeting(&user, &channel, meeting_id, topic, root_id)
    }

    /// Derive a meeting ID from the requester's naming scheme, together
    /// with a derived topic (when the scheme implies one) and whether the
    /// room is the user's personal one.
    fn scheme_meeting_id(
        &self,
        user: &UserProfile,
        channel: &ChannelProfile,
    ) -> Result<(String, Option<String>, bool), Error> {
        match self.user_config(&user.id)?.naming_scheme {
            NamingScheme::Uuid => Ok((naming::uuid_name(), None, false)),
            NamingScheme::Mattermost => {
                if channel.channel_type.is_conversation() {
                    let topic = format!("{}'s Personal Meeting", user.display_name());
                    Ok((
                        naming::personal_meeting_name(&user.username),
                        Some(topic),
                        true,
                    ))
                } else {
                    let team = self.platform.lookup_team(&channel.team_id)?;
                    let topic = format!("{} Channel Meeting", channel.display_name);
                    Ok((
                        naming::team_channel_name(&team.name, &channel.name),
                        Some(topic),
                        false,
                    ))
                }
            }
            // `ask` is resolved interactively before the engine is called;
            // reaching here means no choice was made, so use words.
            NamingScheme::Words | NamingScheme::Ask => {
                Ok((naming::random_words_name(), None, false))
            }
        }
    }

    /// The candidate names the interactive "pick a meeting type" prompt
    /// offers when a user's scheme is `ask`.
    pub fn meeting_name_options(
        &self,
        user: &UserProfile,
        channel: &ChannelProfile,
    ) -> Result<Vec<MeetingNameOption>, Error> {
        let default_topic = if self.config.use_jaas {
            DEFAULT_TOPIC_JAAS
        } else {
            DEFAULT_TOPIC_JITSI
        };

        let mut options = vec![
            MeetingNameOption {
                meeting_id: naming::random_words_name(),
                meeting_topic: default_topic.to_string(),
                personal: false,
            },
            MeetingNameOption {
                meeting_id: naming::personal_meeting_name(&user.username),
                meeting_topic: format!("{}'s Meeting", user.display_name()),
                personal: true,
            },
        ];

        if !channel.channel_type.is_conversation() {
            let team = self.platform.lookup_team(&channel.team_id)?;
            options.push(MeetingNameOption {
                meeting_id: naming::team_channel_name(&team.name, &channel.name),
                meeting_topic: format!("{} Channel Meeting", channel.display_name),
                personal: false,
            });
        }

        options.push(MeetingNameOption {
            meeting_id: naming::uuid_name(),
            meeting_topic: default_topic.to_string(),
            personal: false,
        });

        Ok(options)
    }

    /// Per-user preferences, falling back to the install-wide defaults
    /// when the user has never saved any.
    pub fn user_config(&self, user_id: &str) -> Result<UserConfig, Error> {
        match self.platform.kv_get(&format!("config_{user_id}"))? {
            Some(data) => serde_json::from_slice(&data)
                .map_err(|e| Error::collaborator(format!("corrupt user config: {e}"))),
            None => Ok(UserConfig {
                embedded: self.config.embedded,
                naming_scheme: self.config.naming_scheme,
                use_jaas: self.config.use_jaas,
            }),
        }
    }

    pub fn set_user_config(&self, user_id: &str, config: &UserConfig) -> Result<(), Error> {
        let data = serde_json::to_vec(config)
            .map_err(|e| Error::collaborator(format!("failed to encode user config: {e}")))?;
        self.platform.kv_set(&format!("config_{user_id}"), &data)
    }

    /// The post announcing a meeting, recorded at start time.
    pub fn lookup_meeting_post(&self, meeting_id: &str) -> Result<Option<String>, Error> {
        Ok(self
            .platform
            .kv_get(&format!("post_{meeting_id}"))?
            .map(|data| String::from_utf8_lossy(&data).into_owned()))
    }
}

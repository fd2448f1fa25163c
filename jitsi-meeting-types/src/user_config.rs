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

//! Per-user meeting preferences, persisted by the chat platform's KV store.

use serde::{Deserialize, Serialize};

/// How meeting identifiers are generated for a given user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// Random English phrase, e.g. `FuriousLemursCodeQuietly`.
    #[default]
    Words,
    /// A version-4 UUID.
    Uuid,
    /// Context-derived: personal room for direct/group channels,
    /// team+channel name otherwise.
    Mattermost,
    /// Defer: the user picks interactively before the engine is invoked.
    Ask,
}

/// Per-user configuration, stored as JSON under `config_{user_id}`.
///
/// When no record exists for a user, the install-wide defaults apply.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Open meetings inside the chat client rather than a new tab.
    #[serde(default)]
    pub embedded: bool,
    #[serde(default)]
    pub naming_scheme: NamingScheme,
    #[serde(default)]
    pub use_jaas: bool,
}

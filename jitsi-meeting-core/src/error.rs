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

//! Engine error type.
//!
//! Every public operation returns a single [`Error`]; there is no partial
//! success. `NotAuthorized` is deliberately distinct from anything that
//! could be read as "not found", and `MissingToken` is distinct from
//! `Token` so callers can tell "no token presented" from "token rejected".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid provider configuration, detected before any
    /// meeting is created.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The requester may not perform this operation (e.g. enriching a
    /// token that belongs to someone else).
    #[error("not authorized")]
    NotAuthorized,

    /// No token was presented at all.
    #[error("no token provided")]
    MissingToken,

    /// A presented token failed to parse or verify, or key material could
    /// not be used for signing.
    #[error("invalid token: {0}")]
    Token(String),

    /// A platform collaborator call (user/team/channel lookup, post
    /// creation, KV access) failed. Propagated unchanged, no retries.
    #[error("{0}")]
    Collaborator(String),
}

impl Error {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    pub fn token(detail: impl Into<String>) -> Self {
        Self::Token(detail.into())
    }

    pub fn collaborator(detail: impl Into<String>) -> Self {
        Self::Collaborator(detail.into())
    }
}

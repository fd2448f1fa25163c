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

//! Request bodies sent by clients to the meeting engine's HTTP callers.

use serde::{Deserialize, Serialize};

/// Body of an enrich-meeting-token request: the previously issued JWT the
/// client wants re-signed with refreshed identity claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnrichMeetingJwtRequest {
    pub jwt: String,
}

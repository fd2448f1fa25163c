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

//! Join URL construction.
//!
//! Order matters: the `jwt` query parameter must precede the
//! `#config.callDisplayName` fragment, since everything after `#` never
//! reaches the server and is purely client-side configuration.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::Error;

/// Path of the embedded JaaS web client, served by the plugin itself.
pub const JAAS_CLIENT_PATH: &str = "/plugins/jitsi/public/jaas/jaas.html";

/// Characters escaped inside the display-name fragment.
const DISPLAY_NAME_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join URL on a standard provider: `{base}/{meeting_id}`.
pub fn standard_meeting_url(base_url: &str, meeting_id: &str) -> String {
    format!("{}/{}", base_url.trim().trim_end_matches('/'), meeting_id)
}

/// Join URL for the embedded JaaS client, hosted by the chat installation.
pub fn jaas_meeting_url(site_url: &str, meeting_id: &str) -> String {
    format!(
        "{}{}?meetingID={}",
        site_url.trim().trim_end_matches('/'),
        JAAS_CLIENT_PATH,
        meeting_id
    )
}

/// Append the signed token, starting or extending the query string.
pub fn with_jwt(url: &str, token: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}jwt={token}")
}

/// Append the client-side display-name fragment. Must be applied last.
pub fn with_display_name(url: &str, topic: &str) -> String {
    let quoted = format!("\"{topic}\"");
    format!(
        "{url}#config.callDisplayName={}",
        utf8_percent_encode(&quoted, DISPLAY_NAME_ESCAPE)
    )
}

/// Hostname of the provider base URL, used as the token subject.
pub fn provider_hostname(base_url: &str) -> Result<String, Error> {
    let parsed = Url::parse(base_url.trim())
        .map_err(|e| Error::config(format!("invalid provider URL: {e}")))?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| Error::config("provider URL has no hostname"))
}

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

//! Meeting identifier generation.
//!
//! When no JWT is configured the room name is the only thing standing
//! between a meeting and the public internet, so every random pick below
//! comes from the OS CSPRNG, never a seeded generator.

use rand::rngs::OsRng;
use rand::Rng;

mod words;

use words::{ADJECTIVES, ADVERBS, PLURAL_NOUNS, VERBS};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Entropy suffix length for topic-derived and personal meeting names.
pub const NAME_ENTROPY_LEN: usize = 20;

/// Entropy suffix length for team/channel meeting names.
pub const CHANNEL_ENTROPY_LEN: usize = 10;

fn random_element(list: &'static [&'static str]) -> &'static str {
    list[OsRng.gen_range(0..list.len())]
}

/// `n` random lowercase ASCII letters.
pub fn random_lowercase(n: usize) -> String {
    (0..n)
        .map(|_| LOWERCASE[OsRng.gen_range(0..LOWERCASE.len())] as char)
        .collect()
}

/// Random English phrase: adjective + plural noun + verb + adverb,
/// concatenated with no delimiter (the lists are stored title-cased).
pub fn random_words_name() -> String {
    [
        random_element(ADJECTIVES),
        random_element(PLURAL_NOUNS),
        random_element(VERBS),
        random_element(ADVERBS),
    ]
    .concat()
}

/// A version-4 UUID meeting name.
pub fn uuid_name() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The user's permanent room: `{username}-{20 random lowercase letters}`.
pub fn personal_meeting_name(username: &str) -> String {
    format!("{username}-{}", random_lowercase(NAME_ENTROPY_LEN))
}

/// Channel room: `{team}-{channel}-{10 random lowercase letters}`.
/// An empty team name omits the leading segment.
pub fn team_channel_name(team_name: &str, channel_name: &str) -> String {
    let mut name = team_name.to_string();
    if !name.is_empty() {
        name.push('-');
    }
    name.push_str(channel_name);
    name.push('-');
    name.push_str(&random_lowercase(CHANNEL_ENTROPY_LEN));
    name
}

/// Slugify a topic into a valid meeting identifier: spaces become hyphens,
/// everything outside `[a-zA-Z0-9_-]` is stripped.
pub fn sanitize_meeting_id(topic: &str) -> String {
    let re = regex::Regex::new("[^a-zA-Z0-9_-]+").expect("valid regex");
    re.replace_all(&topic.replace(' ', "-"), "").into_owned()
}

/// Meeting name derived from an explicit topic, suffixed with entropy to
/// avoid collisions between identically named meetings.
pub fn topic_meeting_name(topic: &str) -> String {
    let mut name = sanitize_meeting_id(topic);
    if !name.is_empty() {
        name.push('-');
    }
    name.push_str(&random_lowercase(NAME_ENTROPY_LEN));
    name
}

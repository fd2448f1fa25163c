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

//! Token enrichment and JaaS settings scenarios.

mod test_helpers;

use jitsi_meeting_core::{token, Error, MeetingEngine, PrivacySettings};
use jitsi_meeting_types::{
    Claims, Context, EnrichMeetingJwtRequest, JaasClaims, JaasFeatures, UserClaims,
};
use test_helpers::*;

fn standard_token_with_group(group: &str) -> String {
    let claims = Claims {
        iss: "test-app-id".to_string(),
        aud: vec!["test-app-id".to_string()],
        sub: "meet.jit.si".to_string(),
        exp: chrono::Utc::now().timestamp() + 600,
        room: "some-room".to_string(),
        context: Context {
            user: UserClaims {
                name: "Old Name".to_string(),
                email: "old@example.com".to_string(),
                id: "someone-else".to_string(),
                avatar: "https://old.example.com/avatar".to_string(),
            },
            group: group.to_string(),
        },
    };
    token::sign_standard(TEST_SECRET, &claims).expect("should sign")
}

#[test]
fn standard_enrichment_overlays_identity_and_keeps_group() {
    let engine = engine(jwt_config());
    let old = standard_token_with_group("eng");

    let new = engine
        .update_jwt_user_info(&old, &alice())
        .expect("should re-sign");

    let claims = token::verify_standard(TEST_SECRET, &new).expect("should verify");
    assert_eq!(claims.context.group, "eng");
    assert_eq!(claims.context.user.id, "user-a");
    // Default privacy hides names and email: display degrades to username.
    assert_eq!(claims.context.user.name, "alice");
    assert_eq!(claims.context.user.email, "");
    assert_eq!(
        claims.context.user.avatar,
        format!("{TEST_SITE_URL}/api/v4/users/user-a/image?_=1700000000")
    );
    // Non-identity claims survive untouched.
    assert_eq!(claims.room, "some-room");
}

#[test]
fn permissive_privacy_exposes_name_and_email_on_enrichment() {
    let platform = FakePlatform {
        privacy: PrivacySettings {
            show_full_name: true,
            show_email_address: true,
        },
        ..FakePlatform::default()
    };
    let engine = MeetingEngine::new(platform, jwt_config()).unwrap();
    let old = standard_token_with_group("");

    let new = engine.update_jwt_user_info(&old, &alice()).unwrap();
    let claims = token::verify_standard(TEST_SECRET, &new).unwrap();
    assert_eq!(claims.context.user.name, "Alice Liddell");
    assert_eq!(claims.context.user.email, "alice@example.com");
}

#[test]
fn request_body_entry_point_enriches_for_the_session_user() {
    let engine = engine(jwt_config());
    let request = EnrichMeetingJwtRequest {
        jwt: standard_token_with_group(""),
    };

    let new = engine.enrich_meeting_jwt(&request, "user-a").unwrap();
    let claims = token::verify_standard(TEST_SECRET, &new).unwrap();
    assert_eq!(claims.context.user.id, "user-a");
    assert_eq!(claims.context.user.name, "alice");
}

#[test]
fn standard_enrichment_fails_closed_on_a_bad_token() {
    let engine = engine(jwt_config());

    let err = engine
        .update_jwt_user_info("deadbeef.deadbeef.deadbeef", &alice())
        .unwrap_err();
    assert!(matches!(err, Error::Token(_)));
}

#[test]
fn enrichment_without_a_token_is_not_a_token_error() {
    let engine = engine(jwt_config());
    let err = engine.update_jwt_user_info("", &alice()).unwrap_err();
    assert!(matches!(err, Error::MissingToken));
}

#[test]
fn jaas_enrichment_keeps_entitlements_and_room_but_not_identity() {
    let pem = test_rsa_private_key_pem();
    let engine = engine(jaas_config(&pem));

    let mut old_claims = JaasClaims {
        iss: "chat".to_string(),
        aud: "jitsi".to_string(),
        sub: TEST_JAAS_APP_ID.to_string(),
        room: format!("{TEST_JAAS_APP_ID}/Planning-x"),
        exp: chrono::Utc::now().timestamp() + 7200,
        nbf: chrono::Utc::now().timestamp(),
        ..JaasClaims::default()
    };
    old_claims.context.features = JaasFeatures::uniform("true");
    old_claims.context.user.id = "user-a".to_string();
    old_claims.context.user.name = "Spoofed Name".to_string();
    old_claims.context.user.email = "spoofed@example.com".to_string();
    let old = token::sign_jaas("test-api-key", &pem, &old_claims).unwrap();

    let new = engine.update_jwt_user_info(&old, &alice()).unwrap();
    let claims: JaasClaims = token::parse_claims_unverified(&new).unwrap();

    assert_eq!(claims.room, format!("{TEST_JAAS_APP_ID}/Planning-x"));
    assert_eq!(claims.context.features, JaasFeatures::uniform("true"));
    assert_eq!(claims.context.user.id, "user-a");
    assert_eq!(claims.context.user.moderator, "true");
    // Identity comes from the sanitized requester, not the old token.
    assert_eq!(claims.context.user.name, "alice");
    assert_eq!(claims.context.user.email, "");
}

#[test]
fn enriching_someone_elses_token_is_not_authorized() {
    let pem = test_rsa_private_key_pem();
    let engine = engine(jaas_config(&pem));

    // A perfectly valid token embedding user A…
    let settings = engine
        .get_jaas_settings("garbage", "room/path", Some(&alice()))
        .expect("self-healing should mint a token for alice");

    // …presented by user B.
    let err = engine
        .get_jaas_settings(&settings.jwt, "room/path", Some(&bob()))
        .unwrap_err();
    assert!(matches!(err, Error::NotAuthorized));
}

#[test]
fn unparseable_token_self_heals_for_authenticated_users() {
    let pem = test_rsa_private_key_pem();
    let engine = engine(jaas_config(&pem));

    let settings = engine
        .get_jaas_settings("not-a-jwt", "tenant/Room-1", Some(&alice()))
        .expect("should mint a fresh token");

    assert_eq!(settings.room, "tenant/Room-1");
    let claims: JaasClaims = token::parse_claims_unverified(&settings.jwt).unwrap();
    assert_eq!(claims.context.user.id, "user-a");
    assert_eq!(claims.context.user.moderator, "true");
    assert_eq!(claims.room, "*");
    assert_eq!(claims.context.features, JaasFeatures::uniform("true"));
}

#[test]
fn a_users_own_token_is_returned_verbatim() {
    let pem = test_rsa_private_key_pem();
    let engine = engine(jaas_config(&pem));

    let first = engine
        .get_jaas_settings("", "tenant/Room-1", Some(&alice()))
        .unwrap();
    let second = engine
        .get_jaas_settings(&first.jwt, "tenant/Room-2", Some(&alice()))
        .unwrap();

    assert_eq!(second.jwt, first.jwt);
    assert_eq!(second.room, "tenant/Room-2");
}

#[test]
fn guests_always_get_fresh_unentitled_tokens() {
    let pem = test_rsa_private_key_pem();
    let engine = engine(jaas_config(&pem));

    let settings = engine
        .get_jaas_settings("", "tenant/Room-1", None)
        .expect("guests should get a token");

    assert_eq!(settings.room, "tenant/Room-1");
    let claims: JaasClaims = token::parse_claims_unverified(&settings.jwt).unwrap();
    assert!(claims.context.user.id.ends_with("-guest"));
    assert_eq!(claims.context.user.moderator, "false");
    assert_eq!(claims.context.user.email, "");
    assert_eq!(claims.context.user.name, "");
    assert_eq!(claims.context.features, JaasFeatures::uniform("false"));
}

#[test]
fn jaas_settings_require_jaas_mode() {
    let engine = engine(jwt_config());
    let err = engine
        .get_jaas_settings("", "room", Some(&alice()))
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

//! TokenCodec behavior

use chrono::{Duration, Utc};
use std::time::Duration as StdDuration;
use userapi_domain::error::TokenError;
use userapi_infrastructure::TokenCodec;
use userapi_infrastructure::config::JwtConfig;

const SECRET: &str = "test-secret-key-that-is-long-enough-0123";
const OTHER_SECRET: &str = "another-secret-key-that-is-long-enough-99";

fn codec() -> TokenCodec {
    TokenCodec::new(Some(SECRET), 3600)
}

#[test]
fn test_issued_token_validates() {
    let codec = codec();
    let token = codec.issue("alice", "ROLE_USER").unwrap();

    assert!(codec.validate(&token));
    assert_eq!(codec.extract_username(&token).unwrap(), "alice");
    assert_eq!(
        codec.extract_role(&token).unwrap().as_deref(),
        Some("ROLE_USER")
    );
}

#[test]
fn test_token_without_role() {
    let codec = codec();
    let token = codec.issue_without_role("bob").unwrap();

    assert!(codec.validate(&token));
    assert_eq!(codec.extract_role(&token).unwrap(), None);
}

#[test]
fn test_expiration_matches_ttl() {
    let codec = TokenCodec::new(Some(SECRET), 86_400);
    let before = Utc::now();
    let token = codec.issue("alice", "ROLE_USER").unwrap();
    let exp = codec.extract_expiration(&token).unwrap();

    assert!(exp > before + Duration::seconds(86_398));
    assert!(exp <= before + Duration::seconds(86_401));
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    // Start early in a wall-clock second so the one second window is whole
    while Utc::now().timestamp_subsec_millis() > 500 {
        tokio::time::sleep(StdDuration::from_millis(20)).await;
    }

    let codec = TokenCodec::new(Some(SECRET), 1);
    let token = codec.issue("alice", "ROLE_USER").unwrap();
    assert!(codec.validate(&token));

    tokio::time::sleep(StdDuration::from_millis(1200)).await;

    assert!(!codec.validate(&token));
    assert_eq!(codec.decode(&token), Err(TokenError::Expired));
    // Extraction only checks the signature
    assert_eq!(codec.extract_username(&token).unwrap(), "alice");
}

#[test]
fn test_malformed_inputs_never_validate() {
    let codec = codec();
    let inputs = [
        "",
        "   ",
        "not-a-token",
        "a.b",
        "a.b.c",
        "a.b.c.d",
        "eyJhbGciOiJIUzI1NiJ9.%%%.sig",
        "Bearer abc.def.ghi",
    ];

    for input in inputs {
        assert!(!codec.validate(input), "accepted {input:?}");
        assert!(codec.decode(input).is_err(), "decoded {input:?}");
    }

    for input in ["not-a-token", "a.b.c", "a.b.c.d"] {
        assert!(matches!(
            codec.decode(input),
            Err(TokenError::Malformed { .. })
        ));
    }
}

#[test]
fn test_foreign_signature_rejected() {
    let foreign = TokenCodec::new(Some(OTHER_SECRET), 3600)
        .issue("alice", "ROLE_ADMIN")
        .unwrap();
    let codec = codec();

    assert!(!codec.validate(&foreign));
    assert_eq!(codec.decode(&foreign), Err(TokenError::Signature));
    assert_eq!(codec.extract_username(&foreign), Err(TokenError::Signature));
}

#[test]
fn test_tampered_payload_rejected() {
    let codec = codec();
    let token = codec.issue("alice", "ROLE_USER").unwrap();
    let admin = codec.issue("alice", "ROLE_ADMIN").unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let admin_parts: Vec<&str> = admin.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], admin_parts[1], parts[2]);

    assert!(!codec.validate(&forged));
    assert_eq!(codec.decode(&forged), Err(TokenError::Signature));
}

#[test]
fn test_validate_strict_checks_subject() {
    let codec = codec();
    let token = codec.issue("alice", "ROLE_USER").unwrap();

    assert_eq!(codec.validate_strict(&token, "alice"), Ok(true));
    assert_eq!(codec.validate_strict(&token, "Alice"), Ok(false));
    assert!(matches!(
        codec.validate_strict("garbage", "alice"),
        Err(TokenError::Malformed { .. })
    ));
}

#[test]
fn test_validate_strict_surfaces_expiry() {
    let codec = TokenCodec::new(Some(SECRET), 60);
    let token = codec
        .issue_at("alice", Some("ROLE_USER"), Utc::now() - Duration::hours(1))
        .unwrap();

    assert_eq!(codec.validate_strict(&token, "alice"), Err(TokenError::Expired));
}

#[test]
fn test_extract_username_round_trips_various_subjects() {
    let codec = codec();
    for username in ["a", "alice_01", "ünïcode", "with space", "x".repeat(200).as_str()] {
        let token = codec.issue(username, "ROLE_USER").unwrap();
        assert_eq!(codec.extract_username(&token).unwrap(), username);
    }
}

#[test]
fn test_development_fallback_shared_between_instances() {
    let a = TokenCodec::new(Some("too-short"), 60);
    let b = TokenCodec::new(None, 60);
    let token = a.issue("alice", "ROLE_USER").unwrap();

    assert!(a.uses_development_secret());
    assert!(b.validate(&token));
}

#[test]
fn test_from_config_honors_require_secret() {
    let mut config = JwtConfig {
        require_secret: true,
        ..JwtConfig::default()
    };
    assert!(TokenCodec::from_config(&config).is_err());

    config.secret = Some(SECRET.to_string());
    let codec = TokenCodec::from_config(&config).unwrap();
    assert!(!codec.uses_development_secret());
    assert_eq!(codec.ttl_secs(), config.expiration_secs);
}

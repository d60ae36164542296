//! Tests for request identity and role checks

use userapi_domain::entities::Role;
use userapi_domain::error::Error;
use userapi_domain::value_objects::{AuthContext, Identity};

#[test]
fn test_identity_role_resolution() {
    let identity = Identity::new("alice", Some("ROLE_ADMIN".to_string()));
    assert_eq!(identity.role(), Some(Role::Admin));

    let unknown = Identity::new("eve", Some("ROLE_SUPERUSER".to_string()));
    assert_eq!(unknown.role(), None);
}

#[test]
fn test_forbidden_when_role_missing() {
    let identity = Identity::new("bob", Some("ROLE_USER".to_string()));
    let err = identity.require_any(&[Role::Admin]).unwrap_err();
    assert!(matches!(err, Error::Forbidden { .. }));
}

#[test]
fn test_context_carries_identity() {
    let ctx = AuthContext::authenticated(Identity::new("carol", None));
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.identity().map(|i| i.username.as_str()), Some("carol"));
}

mod permissions;

use ft_auth::{Claims, SessionStore};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) fn signed_token(role_id: i64, exp: i64) -> String {
    let claims = Claims {
        sub: Some("user-12".to_string()),
        role_id: Some(role_id),
        exp: Some(exp),
        iat: Some(exp - 3600),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

/// Store holding a session that stays valid for the whole test run
pub(crate) fn session_with_role(role_id: i64) -> SessionStore {
    let store = SessionStore::new();
    store.login(&signed_token(role_id, 4_000_000_000)).unwrap();
    store
}


use crate::Claims;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mint a properly signed HS256 token. The decoder never checks the
/// signature, but tests should look like real backend traffic.
pub(crate) fn signed_token(role_id: i64, exp: i64) -> String {
    let claims = Claims {
        sub: Some("user-7".to_string()),
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

/// Build a three-segment token around an arbitrary payload string
pub(crate) fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}

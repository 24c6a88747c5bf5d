use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;

/// Extract the claim set from a bearer credential WITHOUT verifying its
/// signature.
///
/// The credential is split on `'.'` into three segments and the middle
/// segment is parsed as a base64url-encoded JSON object. Success means the
/// string parses, nothing more: this decoder is non-authoritative, and the
/// actual trust decision belongs to the backend that issued and verifies
/// the token. Callers must treat any failure as "no role, no session".
#[track_caller]
pub fn decode(credential: &str) -> AuthErrorResult<Claims> {
    let segments: Vec<&str> = credential.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::MalformedToken {
            segments: segments.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| AuthError::PayloadEncoding {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

    serde_json::from_slice(&payload).map_err(|e| AuthError::PayloadJson {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

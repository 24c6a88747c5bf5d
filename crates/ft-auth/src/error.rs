use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: expected 3 segments, got {segments} {location}")]
    MalformedToken {
        segments: usize,
        location: ErrorLocation,
    },

    #[error("Invalid token payload encoding: {source} {location}")]
    PayloadEncoding {
        #[source]
        source: base64::DecodeError,
        location: ErrorLocation,
    },

    #[error("Invalid token payload: {source} {location}")]
    PayloadJson {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Missing claim '{claim}' {location}")]
    MissingClaim {
        claim: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;

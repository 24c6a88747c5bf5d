use ft_core::Role;

use serde::{Deserialize, Serialize};

/// Claim set carried in a FixTrack bearer token payload.
///
/// Every field is optional on the wire; a payload that parses but lacks a
/// claim simply yields `None` for it. Validity and access decisions live
/// with the session store and the access evaluator, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Backend role id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Role carried by the token, if the claim is present and maps to a
    /// known role id.
    pub fn role(&self) -> Option<Role> {
        self.role_id.and_then(|id| Role::from_id(id).ok())
    }
}

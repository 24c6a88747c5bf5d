use serde::{Deserialize, Serialize};

/// Authenticated user's profile, as returned by `GET /auth/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub role_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: String,
    /// Expanded role record, when the backend includes it
    #[serde(default)]
    pub role: Option<RoleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSummary {
    pub id: i64,
    pub name: String,
}

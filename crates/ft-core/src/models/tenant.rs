use serde::{Deserialize, Serialize};

/// User record from the manager's tenant roster endpoint.
///
/// The endpoint returns every manager-visible user; callers filter by
/// `role_id` for actual tenants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role_id: i64,
    pub created_at: String,
}

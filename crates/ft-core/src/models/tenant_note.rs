use serde::{Deserialize, Serialize};

/// Free-text note a manager attaches to a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantNote {
    pub id: i64,
    pub admin_id: i64,
    pub tenant_id: i64,
    pub note: String,
    pub created_at: String,
}

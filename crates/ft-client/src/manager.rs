use crate::Result as ClientResult;
use crate::client::ApiClient;

use ft_core::{Role, Tenant, TenantNote};

use reqwest::Method;
use serde::Serialize;

// =========================================================================
// Manager Operations
// =========================================================================

impl ApiClient {
    /// Fetch the manager's tenant roster.
    ///
    /// The endpoint returns every manager-visible user; the result is
    /// filtered to actual tenants (role id 1) before it is handed out.
    pub async fn list_tenants(&self) -> ClientResult<Vec<Tenant>> {
        let req = self.request(Method::GET, "/api/manager/tenants");
        let users: Vec<Tenant> = self.execute(req).await?;

        Ok(users
            .into_iter()
            .filter(|user| user.role_id == Role::Tenant.id())
            .collect())
    }

    /// Attach a free-text note to a tenant
    pub async fn submit_note(&self, tenant_id: i64, note: &str) -> ClientResult<TenantNote> {
        #[derive(Serialize)]
        struct NoteRequest<'a> {
            tenant_id: i64,
            note: &'a str,
        }

        let body = NoteRequest { tenant_id, note };
        let req = self.request(Method::POST, "/api/manager/notes").json(&body);
        self.execute(req).await
    }
}

/// Case-insensitive roster search on the tenant's full name. A blank term
/// matches everyone.
pub fn search_tenants<'a>(tenants: &'a [Tenant], term: &str) -> Vec<&'a Tenant> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return tenants.iter().collect();
    }

    tenants
        .iter()
        .filter(|tenant| tenant.full_name.to_lowercase().contains(&term))
        .collect()
}

pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::issue_category::IssueCategory;
pub use models::page::Page;
pub use models::role::Role;
pub use models::satisfaction_level::SatisfactionLevel;
pub use models::survey::{SatisfactionCounts, Survey, SurveyStats, SurveyTenant};
pub use models::tenant::Tenant;
pub use models::tenant_note::TenantNote;
pub use models::user_profile::{RoleSummary, UserProfile};

#[cfg(test)]
mod tests;

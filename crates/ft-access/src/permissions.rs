use ft_core::{Page, Role};

use Role::{Administrator, Contractor, Manager, Tenant};

/// Roles permitted to view a page.
///
/// An empty slice means publicly accessible, no check performed. That is
/// distinct from "accessible to no one", which is not representable here
/// and never occurs. There are no wildcards and no role hierarchy: every
/// role that should see a page is listed explicitly, so Administrator
/// gains nothing on manager-only pages.
pub fn allowed_roles(page: Page) -> &'static [Role] {
    match page {
        Page::Admin => &[Administrator],
        Page::AllIssues => &[Manager],
        Page::MyAssignedIssues => &[Contractor],
        Page::AssignmentNotifications => &[Contractor],
        Page::CompletedIssueHistory => &[Contractor],
        Page::ContractorDashboard => &[Contractor],
        Page::ContractorForm => &[],
        Page::Dashboard => &[Tenant, Contractor],
        Page::IssueHistory => &[Tenant, Contractor],
        Page::Login => &[],
        Page::ManagerDashboard => &[Manager],
        Page::MyIssues => &[Tenant, Contractor],
        Page::NewIssue => &[Tenant, Contractor],
        Page::Notifications => &[Tenant, Contractor],
        Page::OtherIssues => &[Manager],
        Page::Profile => &[],
        Page::Register => &[],
        Page::Survey => &[Tenant, Contractor],
        Page::Tenants => &[Manager],
        Page::Unauthorized => &[],
    }
}

/// Whether a page carries no role check at all
pub fn is_public(page: Page) -> bool {
    allowed_roles(page).is_empty()
}

/// Access evaluator.
///
/// Order: an empty allowed set grants unconditionally; an absent role is
/// denied everywhere else; otherwise plain membership.
pub fn is_allowed(page: Page, role: Option<Role>) -> bool {
    let allowed = allowed_roles(page);
    if allowed.is_empty() {
        return true;
    }
    match role {
        None => false,
        Some(role) => allowed.contains(&role),
    }
}

/// Landing page for a role after login or when leaving the unauthorized
/// screen
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Tenant => "/dashboard",
        Manager => "/managerdashboard",
        Contractor => "/dashboard",
        Administrator => "/admin",
    }
}

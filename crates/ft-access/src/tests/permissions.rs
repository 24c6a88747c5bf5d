use crate::{allowed_roles, dashboard_route, is_allowed, is_public};

use ft_core::{Page, Role};

#[test]
fn given_public_page_when_evaluated_then_any_role_allowed() {
    for page in Page::ALL.into_iter().filter(|p| is_public(*p)) {
        assert!(is_allowed(page, None), "{page} should be public");
        for role in Role::ALL {
            assert!(is_allowed(page, Some(role)), "{page} should admit {role}");
        }
    }
}

#[test]
fn given_protected_page_when_no_role_then_denied() {
    for page in Page::ALL.into_iter().filter(|p| !is_public(*p)) {
        assert!(!is_allowed(page, None), "{page} should deny anonymous");
    }
}

#[test]
fn given_any_page_when_evaluated_then_membership_decides() {
    for page in Page::ALL.into_iter().filter(|p| !is_public(*p)) {
        let allowed = allowed_roles(page);
        for role in Role::ALL {
            assert_eq!(
                is_allowed(page, Some(role)),
                allowed.contains(&role),
                "{page} / {role}"
            );
        }
    }
}

#[test]
fn given_manager_when_visiting_tenants_then_allowed() {
    assert!(is_allowed(Page::Tenants, Some(Role::Manager)));
}

#[test]
fn given_tenant_when_visiting_tenants_then_denied() {
    assert!(!is_allowed(Page::Tenants, Some(Role::Tenant)));
}

#[test]
fn given_administrator_when_visiting_manager_page_then_denied() {
    // No role hierarchy: the admin role is not implicitly a manager
    assert!(!is_allowed(Page::ManagerDashboard, Some(Role::Administrator)));
    assert!(!is_allowed(Page::AllIssues, Some(Role::Administrator)));
}

#[test]
fn given_expected_public_set_then_it_matches_the_table() {
    let public: Vec<Page> = Page::ALL.into_iter().filter(|p| is_public(*p)).collect();

    assert_eq!(
        public,
        vec![
            Page::ContractorForm,
            Page::Login,
            Page::Profile,
            Page::Register,
            Page::Unauthorized,
        ]
    );
}

#[test]
fn given_each_role_then_dashboard_route_matches() {
    assert_eq!(dashboard_route(Role::Tenant), "/dashboard");
    assert_eq!(dashboard_route(Role::Manager), "/managerdashboard");
    assert_eq!(dashboard_route(Role::Contractor), "/dashboard");
    assert_eq!(dashboard_route(Role::Administrator), "/admin");
}

use crate::Page;

use std::str::FromStr;

#[test]
fn test_page_slugs_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_str(page.as_str()).unwrap(), page);
    }
}

#[test]
fn test_page_from_path_strips_leading_slash() {
    assert_eq!(Page::from_path("/tenants"), Some(Page::Tenants));
    assert_eq!(Page::from_path("tenants"), Some(Page::Tenants));
}

#[test]
fn test_page_from_path_root_is_dashboard() {
    assert_eq!(Page::from_path("/"), Some(Page::Dashboard));
    assert_eq!(Page::from_path(""), Some(Page::Dashboard));
}

#[test]
fn test_page_from_path_unknown_is_none() {
    assert_eq!(Page::from_path("/does-not-exist"), None);
    assert_eq!(Page::from_path("/tenants/5"), None);
}

#[test]
fn test_page_path_has_leading_slash() {
    assert_eq!(Page::Unauthorized.path(), "/unauthorized");
    assert_eq!(Page::ManagerDashboard.path(), "/managerdashboard");
}

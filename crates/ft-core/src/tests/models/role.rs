use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_ids_match_backend() {
    assert_eq!(Role::Tenant.id(), 1);
    assert_eq!(Role::Manager.id(), 2);
    assert_eq!(Role::Contractor.id(), 3);
    assert_eq!(Role::Administrator.id(), 4);
}

#[test]
fn test_role_from_id_round_trips() {
    for role in Role::ALL {
        assert_eq!(Role::from_id(role.id()).unwrap(), role);
    }
}

#[test]
fn test_role_from_id_rejects_unknown() {
    assert!(Role::from_id(0).is_err());
    assert!(Role::from_id(5).is_err());
    assert!(Role::from_id(-1).is_err());
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
    assert!(Role::from_str("upravnik").is_err());
}

#[test]
fn test_role_display_names() {
    assert_eq!(Role::Tenant.display_name(), "Stanar");
    assert_eq!(Role::Manager.display_name(), "Upravnik");
    assert_eq!(Role::Contractor.display_name(), "Izvođač");
    assert_eq!(Role::Administrator.display_name(), "Administrator");
}

use wfotracker::core::access::{can_add, can_edit, can_edit_forecast};
use wfotracker::models::identity::Role;

#[test]
fn only_admins_and_managers_add_records() {
    assert!(can_add(Role::Admin));
    assert!(can_add(Role::Manager));
    assert!(!can_add(Role::Viewer));
}

#[test]
fn viewers_edit_only_their_own_rows() {
    assert!(can_edit(Role::Viewer, "Alice Smith", "Alice"));
    assert!(!can_edit(Role::Viewer, "Bob Jones", "Alice"));

    // admins and managers edit any row
    assert!(can_edit(Role::Admin, "Bob Jones", "Alice"));
    assert!(can_edit(Role::Manager, "Bob Jones", "Alice"));
}

#[test]
fn only_viewers_get_the_editable_calendar() {
    assert!(can_edit_forecast(Role::Viewer));
    assert!(!can_edit_forecast(Role::Admin));
    assert!(!can_edit_forecast(Role::Manager));
}

#[test]
fn roles_parse_case_insensitively() {
    assert_eq!(Role::parse("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::parse("MANAGER").unwrap(), Role::Manager);
    assert_eq!(Role::parse("viewer").unwrap(), Role::Viewer);
    assert!(Role::parse("root").is_err());
}

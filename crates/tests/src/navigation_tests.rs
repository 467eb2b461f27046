use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::{menu_for, page_title, Role, ALL_ROLES};

fn keys(role: Role) -> Vec<&'static str> {
    menu_for(role).iter().map(|e| e.page_key).collect()
}

#[test]
fn every_role_has_a_menu_starting_at_dashboard() {
    for role in ALL_ROLES.iter().copied() {
        let menu = menu_for(role);
        assert!(!menu.is_empty(), "{role:?}");
        assert_eq!(menu[0].page_key, "dashboard");
    }
}

#[test]
fn menus_are_role_specific() {
    let distinct: HashSet<Vec<&str>> = ALL_ROLES.iter().map(|r| keys(*r)).collect();
    assert_eq!(distinct.len(), ALL_ROLES.len());
}

#[test]
fn admin_menu_is_the_longest() {
    let admin = menu_for(Role::Admin).len();
    for role in ALL_ROLES.iter().copied() {
        assert!(admin >= menu_for(role).len(), "{role:?}");
    }
}

#[test]
fn teacher_menu_order() {
    assert_eq!(
        keys(Role::Teacher),
        vec!["dashboard", "mark-attendance", "schedule", "approvals", "reports"]
    );
}

#[test]
fn menu_for_is_idempotent() {
    for role in ALL_ROLES.iter().copied() {
        assert_eq!(menu_for(role), menu_for(role));
    }
}

#[test]
fn page_titles() {
    assert_eq!(page_title("dashboard"), "Dashboard");
    assert_eq!(page_title("mark-attendance"), "Mark Attendance");
    assert_eq!(page_title("leave-management"), "Leave Management");
}

use pretty_assertions::assert_eq;
use shared_types::{Role, ShellState, User, ViewVariant};

use crate::common;

#[test]
fn starts_on_dashboard_with_drawer_closed() {
    let shell = ShellState::new(common::user(Role::Teacher));
    assert_eq!(shell.active_page(), "dashboard");
    assert!(!shell.drawer_open());
    assert_eq!(shell.view(), ViewVariant::TeacherDashboard);
    assert_eq!(shell.page_title(), "Dashboard");
}

#[test]
fn navigating_from_an_open_drawer_closes_it() {
    let mut shell = ShellState::new(common::user(Role::Teacher));
    shell.open_drawer();
    shell.navigate("mark-attendance");
    assert_eq!(shell.active_page(), "mark-attendance");
    assert_eq!(shell.view(), ViewVariant::BulkEditor);
    assert_eq!(shell.page_title(), "Mark Attendance");
    assert!(!shell.drawer_open());
}

#[test]
fn toggle_and_close_drawer() {
    let mut shell = ShellState::new(common::user(Role::Student));
    shell.toggle_drawer();
    assert!(shell.drawer_open());
    shell.toggle_drawer();
    assert!(!shell.drawer_open());
    shell.open_drawer();
    shell.close_drawer();
    assert!(!shell.drawer_open());
}

#[test]
fn unrouted_menu_entry_shows_placeholder() {
    let mut shell = ShellState::new(common::user(Role::Student));
    shell.navigate("leave");
    assert_eq!(shell.view(), ViewVariant::Placeholder);
    assert_eq!(shell.page_title(), "Leave");
}

#[test]
fn session_derived_labels() {
    let shell = ShellState::new(common::user(Role::Hod));
    assert_eq!(shell.portal_label(), "Hod Portal");
    assert_eq!(shell.user_initial(), "T");

    let nameless = ShellState::new(User {
        name: String::new(),
        ..User::default()
    });
    assert_eq!(nameless.user_initial(), "?");
}

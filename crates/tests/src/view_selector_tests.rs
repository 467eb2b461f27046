use pretty_assertions::assert_eq;
use shared_types::{routed_page_keys, select, Role, ViewVariant, ALL_ROLES};

#[test]
fn student_dashboard_for_students_only() {
    assert_eq!(select(Role::Student, "dashboard"), ViewVariant::StudentDashboard);
    for role in [Role::Teacher, Role::Hod, Role::Admin] {
        assert_eq!(select(role, "dashboard"), ViewVariant::TeacherDashboard, "{role:?}");
    }
}

#[test]
fn fixed_views_ignore_role() {
    for role in ALL_ROLES.iter().copied() {
        assert_eq!(select(role, "calendar"), ViewVariant::Calendar);
        assert_eq!(select(role, "my-attendance"), ViewVariant::Calendar);
        assert_eq!(select(role, "mark-attendance"), ViewVariant::BulkEditor);
        assert_eq!(select(role, "reports"), ViewVariant::Reports);
        assert_eq!(select(role, "analytics"), ViewVariant::Reports);
    }
}

#[test]
fn unknown_keys_fall_back_to_placeholder() {
    let unknown = ["leave", "settings", "users", "", "DASHBOARD", "reports ", "system-reports"];
    for role in ALL_ROLES.iter().copied() {
        for key in unknown {
            assert_eq!(select(role, key), ViewVariant::Placeholder, "{role:?} {key:?}");
        }
    }
}

#[test]
fn select_is_idempotent() {
    for role in ALL_ROLES.iter().copied() {
        for key in routed_page_keys().chain(["nope"]) {
            assert_eq!(select(role, key), select(role, key));
        }
    }
}

#[test]
fn view_variant_serializes_by_name() {
    let json = serde_json::to_value(ViewVariant::BulkEditor).unwrap();
    assert_eq!(json, serde_json::json!("BulkEditor"));
}

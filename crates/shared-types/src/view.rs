use serde::Serialize;

use crate::models::Role;

/// The body content the shell renders for the active page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ViewVariant {
    StudentDashboard,
    TeacherDashboard,
    Calendar,
    BulkEditor,
    Reports,
    /// "Coming soon" for every page without a dedicated view.
    Placeholder,
}

/// Target of a page key before the role is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewTarget {
    Dashboard,
    Fixed(ViewVariant),
}

const VIEW_TABLE: &[(&str, ViewTarget)] = &[
    ("dashboard", ViewTarget::Dashboard),
    ("calendar", ViewTarget::Fixed(ViewVariant::Calendar)),
    ("my-attendance", ViewTarget::Fixed(ViewVariant::Calendar)),
    ("mark-attendance", ViewTarget::Fixed(ViewVariant::BulkEditor)),
    ("reports", ViewTarget::Fixed(ViewVariant::Reports)),
    ("analytics", ViewTarget::Fixed(ViewVariant::Reports)),
];

/// Resolve the view for a role and page key. Unknown keys resolve to
/// [`ViewVariant::Placeholder`].
pub fn select(role: Role, page_key: &str) -> ViewVariant {
    let target = VIEW_TABLE
        .iter()
        .find(|(key, _)| *key == page_key)
        .map(|(_, target)| *target);

    match target {
        Some(ViewTarget::Dashboard) => dashboard_for(role),
        Some(ViewTarget::Fixed(view)) => view,
        None => ViewVariant::Placeholder,
    }
}

/// HOD and admin share the teacher dashboard.
fn dashboard_for(role: Role) -> ViewVariant {
    match role {
        Role::Student => ViewVariant::StudentDashboard,
        Role::Teacher | Role::Hod | Role::Admin => ViewVariant::TeacherDashboard,
    }
}

/// Page keys that resolve to a dedicated view.
pub fn routed_page_keys() -> impl Iterator<Item = &'static str> {
    VIEW_TABLE.iter().map(|(key, _)| *key)
}

use serde::Serialize;

use crate::models::Role;

/// Icon shown next to a navigation entry. The UI layer maps these to glyphs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Users,
    Calendar,
    ClipboardList,
    BarChart,
    Settings,
}

/// A single drawer entry. Slice order is display order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub page_key: &'static str,
    pub icon: NavIcon,
}

const fn entry(icon: NavIcon, label: &'static str, page_key: &'static str) -> NavigationEntry {
    NavigationEntry {
        label,
        page_key,
        icon,
    }
}

const STUDENT_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Dashboard", "dashboard"),
    entry(NavIcon::Calendar, "My Attendance", "calendar"),
    entry(NavIcon::ClipboardList, "Leave Requests", "leave"),
    entry(NavIcon::BarChart, "Reports", "reports"),
];

const TEACHER_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Dashboard", "dashboard"),
    entry(NavIcon::Users, "Mark Attendance", "mark-attendance"),
    entry(NavIcon::Calendar, "Class Schedule", "schedule"),
    entry(NavIcon::ClipboardList, "Leave Approvals", "approvals"),
    entry(NavIcon::BarChart, "Reports", "reports"),
];

const HOD_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Dashboard", "dashboard"),
    entry(NavIcon::Users, "Department Overview", "department"),
    entry(NavIcon::Calendar, "Attendance Calendar", "calendar"),
    entry(NavIcon::ClipboardList, "Leave Management", "leave-management"),
    entry(NavIcon::BarChart, "Analytics", "analytics"),
];

const ADMIN_MENU: &[NavigationEntry] = &[
    entry(NavIcon::Dashboard, "Dashboard", "dashboard"),
    entry(NavIcon::Users, "User Management", "users"),
    entry(NavIcon::Calendar, "System Calendar", "calendar"),
    entry(NavIcon::ClipboardList, "All Requests", "all-requests"),
    entry(NavIcon::BarChart, "System Reports", "system-reports"),
    entry(NavIcon::Settings, "Settings", "settings"),
];

/// The navigation drawer entries for a role.
pub fn menu_for(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Student => STUDENT_MENU,
        Role::Teacher => TEACHER_MENU,
        Role::Hod => HOD_MENU,
        Role::Admin => ADMIN_MENU,
    }
}

impl NavigationEntry {
    pub fn is_active(&self, active_page: &str) -> bool {
        self.page_key == active_page
    }
}

/// Header title for a page key: the first `-` becomes a space and every
/// word is capitalised ("mark-attendance" → "Mark Attendance").
pub fn page_title(page_key: &str) -> String {
    page_key
        .replacen('-', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

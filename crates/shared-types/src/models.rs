use serde::{Deserialize, Serialize};

/// Portal role controlling the navigation menu and the dashboard variant.
///
/// - `Student`: own attendance, calendar and reports.
/// - `Teacher`: marks attendance for classes, reviews leave.
/// - `Hod`: head of department, department-wide calendar and analytics.
/// - `Admin`: full menu including settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Hod,
    Admin,
}

/// All roles in menu-definition order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Teacher, Role::Hod, Role::Admin];

impl Role {
    /// Parse a role key. Unknown values default to `Student`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Role::Teacher,
            "hod" => Role::Hod,
            "admin" => Role::Admin,
            _ => Role::Student,
        }
    }

    /// Lowercase key used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Hod => "hod",
            Role::Admin => "admin",
        }
    }

    /// Capitalised label shown in the drawer, e.g. "Hod".
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Hod => "Hod",
            Role::Admin => "Admin",
        }
    }
}

/// The signed-in user. Fixed for the whole session; there is no login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub role: Role,
    pub id: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "Sarah Johnson".to_string(),
            role: Role::Student,
            id: "student_001".to_string(),
        }
    }
}

impl User {
    /// First character of the name, upper-cased, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A value/label pair backing a select control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_known_values() {
        assert_eq!(Role::from_str_or_default("student"), Role::Student);
        assert_eq!(Role::from_str_or_default("teacher"), Role::Teacher);
        assert_eq!(Role::from_str_or_default("hod"), Role::Hod);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
    }

    #[test]
    fn role_from_str_is_case_insensitive() {
        assert_eq!(Role::from_str_or_default("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str_or_default(" Hod "), Role::Hod);
    }

    #[test]
    fn role_from_str_unknown_falls_back_to_student() {
        assert_eq!(Role::from_str_or_default("principal"), Role::Student);
        assert_eq!(Role::from_str_or_default(""), Role::Student);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Hod).unwrap();
        assert_eq!(json, "\"hod\"");
    }

    #[test]
    fn default_user_is_demo_student() {
        let user = User::default();
        assert_eq!(user.name, "Sarah Johnson");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.id, "student_001");
    }

    #[test]
    fn user_initial_uppercases_first_char() {
        let user = User {
            name: "ravi kumar".into(),
            role: Role::Teacher,
            id: "t_9".into(),
        };
        assert_eq!(user.initial(), "R");
    }

    #[test]
    fn user_initial_for_empty_name() {
        let user = User {
            name: String::new(),
            role: Role::Admin,
            id: "a_1".into(),
        };
        assert_eq!(user.initial(), "?");
    }
}

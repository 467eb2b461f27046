use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceStatus;

/// Minimum overall attendance a student must hold, inclusive.
pub const MINIMUM_ATTENDANCE: u32 = 75;

// ---------------------------------------------------------------------------
// Student dashboard
// ---------------------------------------------------------------------------

/// Overall-attendance band shown on the student dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl AttendanceBand {
    /// `>=85` Excellent, `>=75` Good, otherwise Needs Improvement.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 85 {
            AttendanceBand::Excellent
        } else if percentage >= 75 {
            AttendanceBand::Good
        } else {
            AttendanceBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceBand::Excellent => "Excellent",
            AttendanceBand::Good => "Good",
            AttendanceBand::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Status tone the badge borrows its colour from.
    pub fn tone(&self) -> AttendanceStatus {
        match self {
            AttendanceBand::Excellent => AttendanceStatus::Present,
            AttendanceBand::Good => AttendanceStatus::Leave,
            AttendanceBand::NeedsImprovement => AttendanceStatus::Absent,
        }
    }
}

pub fn meets_minimum(percentage: u32) -> bool {
    percentage >= MINIMUM_ATTENDANCE
}

/// Caption under the status badge.
pub fn minimum_requirement_message(percentage: u32) -> &'static str {
    if meets_minimum(percentage) {
        "Above minimum requirement"
    } else {
        "Below 75% threshold"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentAttendance {
    pub date: String,
    pub subject: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingClass {
    pub time: String,
    pub subject: String,
    pub room: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rewards {
    pub points: u32,
    pub badges: Vec<String>,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectAttendance {
    pub subject: String,
    /// Percentage of sessions attended.
    pub attendance: u32,
    /// Sessions held.
    pub total: u32,
}

impl SubjectAttendance {
    /// `round(attendance * total / 100)`.
    pub fn attended_classes(&self) -> u32 {
        (f64::from(self.attendance) * f64::from(self.total) / 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentDashboardSnapshot {
    pub overall_attendance: u32,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub recent_attendance: Vec<RecentAttendance>,
    pub upcoming_classes: Vec<UpcomingClass>,
    pub rewards: Rewards,
    pub subject_wise: Vec<SubjectAttendance>,
}

impl StudentDashboardSnapshot {
    pub fn band(&self) -> AttendanceBand {
        AttendanceBand::for_percentage(self.overall_attendance)
    }

    pub fn meets_minimum(&self) -> bool {
        meets_minimum(self.overall_attendance)
    }

    pub fn classes_today(&self) -> usize {
        self.upcoming_classes.len()
    }

    pub fn next_class_label(&self) -> String {
        self.upcoming_classes
            .first()
            .map(|c| c.time.clone())
            .unwrap_or_else(|| "No more classes".to_string())
    }
}

// ---------------------------------------------------------------------------
// Teacher dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledClass {
    pub time: String,
    pub subject: String,
    pub class_name: String,
    pub room: String,
    /// Whether attendance has been taken for this session.
    pub marked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingTask {
    pub kind: String,
    pub count: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassStats {
    pub total_students: u32,
    pub present_today: u32,
    pub attendance_rate: f64,
    pub average_attendance: f64,
}

/// An entry in the activity feed. Exactly one of the context fields is
/// normally set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub time: String,
}

impl ActivityItem {
    /// First of class, student, subject that is present.
    pub fn context(&self) -> &str {
        self.class_name
            .as_deref()
            .or(self.student.as_deref())
            .or(self.subject.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentStanding {
    pub name: String,
    pub attendance: u32,
    pub class_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherDashboardSnapshot {
    pub todays_classes: Vec<ScheduledClass>,
    pub pending_tasks: Vec<PendingTask>,
    pub class_stats: ClassStats,
    pub recent_activity: Vec<ActivityItem>,
    pub top_performers: Vec<StudentStanding>,
    pub low_attendance: Vec<StudentStanding>,
}

impl TeacherDashboardSnapshot {
    pub fn marked_count(&self) -> usize {
        self.todays_classes.iter().filter(|c| c.marked).count()
    }

    pub fn pending_count(&self) -> usize {
        self.todays_classes.iter().filter(|c| !c.marked).count()
    }

    pub fn pending_task_total(&self) -> u32 {
        self.pending_tasks.iter().map(|t| t.count).sum()
    }
}

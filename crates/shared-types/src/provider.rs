use crate::attendance::{AttendanceStatus, MarkStatus};
use crate::calendar::CalendarRecords;
use crate::dashboard::{
    ActivityItem, ClassStats, PendingTask, RecentAttendance, Rewards, ScheduledClass,
    StudentDashboardSnapshot, StudentStanding, SubjectAttendance, TeacherDashboardSnapshot,
    UpcomingClass,
};
use crate::models::SelectOption;
use crate::reports::{
    ClassReport, LowAttendanceStudent, ReportSnapshot, ReportSummary, Severity, SubjectReport,
    TrendDirection,
};
use crate::roster::StudentAttendanceRow;

/// Source of every dataset the views display.
pub trait AttendanceDataProvider {
    fn student_dashboard(&self) -> StudentDashboardSnapshot;
    fn teacher_dashboard(&self) -> TeacherDashboardSnapshot;
    fn calendar_records(&self) -> CalendarRecords;
    fn report_snapshot(&self) -> ReportSnapshot;
    fn roster(&self) -> Vec<StudentAttendanceRow>;
    /// Classes offered by the marking form.
    fn class_options(&self) -> Vec<SelectOption>;
    /// Subjects offered by the marking form.
    fn subject_options(&self) -> Vec<SelectOption>;
    /// Class filter in the reports view, "all" first.
    fn report_class_options(&self) -> Vec<SelectOption>;
    /// Subject filter in the reports view, "all" first.
    fn report_subject_options(&self) -> Vec<SelectOption>;
    fn report_type_options(&self) -> Vec<SelectOption>;
}

/// Fixed demo data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataProvider;

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs.iter().map(|(value, label)| SelectOption::new(*value, *label)).collect()
}

const MARKING_CLASSES: &[(&str, &str)] = &[
    ("10a", "10th A"),
    ("10b", "10th B"),
    ("11a", "11th A"),
    ("11b", "11th B"),
    ("12a", "12th A"),
    ("12b", "12th B"),
];

const SUBJECTS: &[(&str, &str)] = &[
    ("math", "Mathematics"),
    ("physics", "Physics"),
    ("chemistry", "Chemistry"),
    ("english", "English"),
    ("computer", "Computer Science"),
];

fn standing(name: &str, attendance: u32, class_name: &str) -> StudentStanding {
    StudentStanding {
        name: name.into(),
        attendance,
        class_name: class_name.into(),
    }
}

fn activity(action: &str, class_name: Option<&str>, student: Option<&str>, subject: Option<&str>, time: &str) -> ActivityItem {
    ActivityItem {
        action: action.into(),
        class_name: class_name.map(Into::into),
        student: student.map(Into::into),
        subject: subject.map(Into::into),
        time: time.into(),
    }
}

impl AttendanceDataProvider for MockDataProvider {
    fn student_dashboard(&self) -> StudentDashboardSnapshot {
        let recent = [
            ("2024-01-22", "Mathematics", AttendanceStatus::Present),
            ("2024-01-22", "Physics", AttendanceStatus::Present),
            ("2024-01-21", "Chemistry", AttendanceStatus::Absent),
            ("2024-01-21", "English", AttendanceStatus::Present),
            ("2024-01-20", "Computer Science", AttendanceStatus::Late),
        ];
        let upcoming = [
            ("10:00 AM", "Mathematics", "Room 101"),
            ("2:00 PM", "Physics Lab", "Lab 203"),
            ("4:00 PM", "English", "Room 105"),
        ];
        let subjects = [
            ("Mathematics", 85, 25),
            ("Physics", 72, 25),
            ("Chemistry", 80, 20),
            ("English", 90, 20),
            ("Computer Science", 65, 30),
        ];

        StudentDashboardSnapshot {
            overall_attendance: 78,
            total_classes: 120,
            attended_classes: 94,
            recent_attendance: recent
                .iter()
                .map(|(date, subject, status)| RecentAttendance {
                    date: (*date).into(),
                    subject: (*subject).into(),
                    status: *status,
                })
                .collect(),
            upcoming_classes: upcoming
                .iter()
                .map(|(time, subject, room)| UpcomingClass {
                    time: (*time).into(),
                    subject: (*subject).into(),
                    room: (*room).into(),
                })
                .collect(),
            rewards: Rewards {
                points: 450,
                badges: vec![
                    "Perfect Week".into(),
                    "Early Bird".into(),
                    "Consistent Learner".into(),
                ],
                current_streak: 7,
            },
            subject_wise: subjects
                .iter()
                .map(|(subject, attendance, total)| SubjectAttendance {
                    subject: (*subject).into(),
                    attendance: *attendance,
                    total: *total,
                })
                .collect(),
        }
    }

    fn teacher_dashboard(&self) -> TeacherDashboardSnapshot {
        let classes = [
            ("09:00 AM", "Mathematics", "10th A", "Room 101", true),
            ("11:00 AM", "Mathematics", "10th B", "Room 102", false),
            ("02:00 PM", "Advanced Math", "12th A", "Room 103", false),
        ];
        let tasks = [
            ("attendance", 2, "Classes pending attendance marking"),
            ("leave", 5, "Leave requests awaiting approval"),
            ("reports", 1, "Weekly reports to submit"),
        ];

        TeacherDashboardSnapshot {
            todays_classes: classes
                .iter()
                .map(|(time, subject, class_name, room, marked)| ScheduledClass {
                    time: (*time).into(),
                    subject: (*subject).into(),
                    class_name: (*class_name).into(),
                    room: (*room).into(),
                    marked: *marked,
                })
                .collect(),
            pending_tasks: tasks
                .iter()
                .map(|(kind, count, label)| PendingTask {
                    kind: (*kind).into(),
                    count: *count,
                    label: (*label).into(),
                })
                .collect(),
            class_stats: ClassStats {
                total_students: 150,
                present_today: 142,
                attendance_rate: 94.7,
                average_attendance: 87.5,
            },
            recent_activity: vec![
                activity("Marked attendance", Some("10th A Mathematics"), None, None, "2 hours ago"),
                activity("Approved leave request", None, Some("John Doe"), None, "4 hours ago"),
                activity("Generated report", Some("10th B Mathematics"), None, None, "1 day ago"),
                activity("Updated timetable", None, None, Some("Advanced Math"), "2 days ago"),
            ],
            top_performers: vec![
                standing("Sarah Wilson", 98, "10th A"),
                standing("Mike Johnson", 96, "10th B"),
                standing("Emma Davis", 95, "12th A"),
            ],
            low_attendance: vec![
                standing("Alex Brown", 68, "10th A"),
                standing("Lisa Chen", 72, "10th B"),
                standing("David Wilson", 74, "12th A"),
            ],
        }
    }

    fn calendar_records(&self) -> CalendarRecords {
        CalendarRecords::from_iso_pairs([
            ("2024-01-15", AttendanceStatus::Present),
            ("2024-01-16", AttendanceStatus::Present),
            ("2024-01-17", AttendanceStatus::Absent),
            ("2024-01-18", AttendanceStatus::Present),
            ("2024-01-19", AttendanceStatus::Late),
            ("2024-01-22", AttendanceStatus::Present),
            ("2024-01-23", AttendanceStatus::Present),
            ("2024-01-24", AttendanceStatus::Leave),
            ("2024-01-25", AttendanceStatus::Present),
            ("2024-01-26", AttendanceStatus::Present),
        ])
    }

    fn report_snapshot(&self) -> ReportSnapshot {
        let classes = [
            ("10th A", 30, 92.3, TrendDirection::Up),
            ("10th B", 28, 89.1, TrendDirection::Down),
            ("11th A", 32, 85.7, TrendDirection::Up),
            ("11th B", 30, 90.2, TrendDirection::Up),
            ("12th A", 30, 84.3, TrendDirection::Down),
        ];
        let subjects = [
            ("Mathematics", 88.5, 12),
            ("Physics", 85.2, 10),
            ("Chemistry", 87.8, 8),
            ("English", 91.3, 8),
            ("Computer Science", 89.7, 7),
        ];
        let low = [
            ("Alex Brown", "10th A", 68, "critical"),
            ("Lisa Chen", "10th B", 72, "warning"),
            ("David Wilson", "12th A", 74, "warning"),
            ("Maria Garcia", "11th A", 69, "critical"),
            ("James Miller", "10th A", 71, "warning"),
        ];

        ReportSnapshot {
            summary: ReportSummary {
                total_students: 150,
                average_attendance: 87.5,
                total_classes: 45,
                low_attendance_count: 12,
            },
            class_wise: classes
                .iter()
                .map(|(class_name, students, attendance, trend)| ClassReport {
                    class_name: (*class_name).into(),
                    students: *students,
                    attendance: *attendance,
                    trend: *trend,
                })
                .collect(),
            subject_wise: subjects
                .iter()
                .map(|(subject, attendance, classes)| SubjectReport {
                    subject: (*subject).into(),
                    attendance: *attendance,
                    classes: *classes,
                })
                .collect(),
            low_attendance: low
                .iter()
                .map(|(name, class_name, attendance, severity)| LowAttendanceStudent {
                    name: (*name).into(),
                    class_name: (*class_name).into(),
                    attendance: *attendance,
                    severity: Severity::from_str_or_default(severity),
                })
                .collect(),
        }
    }

    fn roster(&self) -> Vec<StudentAttendanceRow> {
        [
            "Alice Johnson",
            "Bob Smith",
            "Charlie Brown",
            "Diana Prince",
            "Edward Norton",
            "Fiona Green",
            "George Wilson",
            "Hannah Davis",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| StudentAttendanceRow {
            id: (i + 1).to_string(),
            name: (*name).into(),
            roll_number: format!("10A{:03}", i + 1),
            class_name: "10th A".into(),
            status: MarkStatus::Present,
        })
        .collect()
    }

    fn class_options(&self) -> Vec<SelectOption> {
        options(MARKING_CLASSES)
    }

    fn subject_options(&self) -> Vec<SelectOption> {
        options(SUBJECTS)
    }

    fn report_class_options(&self) -> Vec<SelectOption> {
        // 12th B has no report data.
        let mut out = vec![SelectOption::new("all", "All Classes")];
        out.extend(options(&MARKING_CLASSES[..5]));
        out
    }

    fn report_subject_options(&self) -> Vec<SelectOption> {
        let mut out = vec![SelectOption::new("all", "All Subjects")];
        out.extend(options(SUBJECTS));
        out
    }

    fn report_type_options(&self) -> Vec<SelectOption> {
        options(&[
            ("summary", "Summary Report"),
            ("detailed", "Detailed Report"),
            ("monthly", "Monthly Report"),
            ("student-wise", "Student-wise Report"),
            ("class-wise", "Class-wise Report"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_and_roll_numbers() {
        let roster = MockDataProvider.roster();
        assert_eq!(roster.len(), 8);
        assert_eq!(roster[0].id, "1");
        assert_eq!(roster[0].roll_number, "10A001");
        assert_eq!(roster[7].name, "Hannah Davis");
        assert_eq!(roster[7].roll_number, "10A008");
        assert!(roster.iter().all(|r| r.status == MarkStatus::Present));
    }

    #[test]
    fn calendar_has_ten_days_seven_present() {
        let records = MockDataProvider.calendar_records();
        assert_eq!(records.total_recorded_days(), 10);
        assert_eq!(records.counts().present, 7);
        assert_eq!(records.attendance_percentage(), 70);
    }

    #[test]
    fn report_filters_lead_with_all() {
        let classes = MockDataProvider.report_class_options();
        assert_eq!(classes[0].value, "all");
        assert_eq!(classes.last().map(|o| o.label.as_str()), Some("12th A"));
        assert_eq!(MockDataProvider.report_subject_options().len(), 6);
    }

    #[test]
    fn teacher_dashboard_counts() {
        let snapshot = MockDataProvider.teacher_dashboard();
        assert_eq!(snapshot.marked_count(), 1);
        assert_eq!(snapshot.pending_count(), 2);
        assert_eq!(snapshot.pending_task_total(), 8);
    }
}

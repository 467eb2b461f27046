use pretty_assertions::assert_eq;
use shared_types::{
    minimum_requirement_message, AttendanceBand, AttendanceDataProvider, MockDataProvider,
    StudentDashboardSnapshot,
};

#[test]
fn student_banding_boundaries() {
    assert_eq!(AttendanceBand::for_percentage(85), AttendanceBand::Excellent);
    assert_eq!(AttendanceBand::for_percentage(84), AttendanceBand::Good);
    assert_eq!(AttendanceBand::for_percentage(75), AttendanceBand::Good);
    assert_eq!(AttendanceBand::for_percentage(74), AttendanceBand::NeedsImprovement);
}

#[test]
fn minimum_requirement_is_inclusive() {
    assert_eq!(minimum_requirement_message(75), "Above minimum requirement");
    assert_eq!(minimum_requirement_message(74), "Below 75% threshold");
}

#[test]
fn mock_student_overview() {
    let snapshot = MockDataProvider.student_dashboard();
    assert_eq!(snapshot.overall_attendance, 78);
    assert_eq!(snapshot.band(), AttendanceBand::Good);
    assert!(snapshot.meets_minimum());
    assert_eq!(snapshot.classes_today(), 3);
    assert_eq!(snapshot.next_class_label(), "10:00 AM");
}

#[test]
fn no_upcoming_classes_label() {
    let snapshot = StudentDashboardSnapshot {
        upcoming_classes: Vec::new(),
        ..MockDataProvider.student_dashboard()
    };
    assert_eq!(snapshot.classes_today(), 0);
    assert_eq!(snapshot.next_class_label(), "No more classes");
}

#[test]
fn subject_attended_classes_are_rounded() {
    let attended: Vec<u32> = MockDataProvider
        .student_dashboard()
        .subject_wise
        .iter()
        .map(|s| s.attended_classes())
        .collect();
    assert_eq!(attended, vec![21, 18, 16, 18, 20]);
}

#[test]
fn teacher_activity_context_prefers_class() {
    let snapshot = MockDataProvider.teacher_dashboard();
    let contexts: Vec<&str> = snapshot.recent_activity.iter().map(|a| a.context()).collect();
    assert_eq!(
        contexts,
        vec!["10th A Mathematics", "John Doe", "10th B Mathematics", "Advanced Math"]
    );
}

use pretty_assertions::assert_eq;
use shared_types::{
    AttendanceBand, AttendanceDataProvider, MockDataProvider, ReportFilterState, ReportFormat,
    Severity, TrendDirection, TrendLevel,
};

#[test]
fn class_levels_and_short_labels() {
    let report = MockDataProvider.report_snapshot();
    let rows: Vec<(&str, TrendLevel)> = report
        .class_wise
        .iter()
        .map(|c| (c.short_label(), c.level()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("10th", TrendLevel::Excellent),
            ("10th", TrendLevel::Good),
            ("11th", TrendLevel::Good),
            ("11th", TrendLevel::Excellent),
            ("12th", TrendLevel::Good),
        ]
    );
}

#[test]
fn only_up_is_rising() {
    let report = MockDataProvider.report_snapshot();
    let rising = report
        .class_wise
        .iter()
        .filter(|c| c.trend == TrendDirection::Up)
        .count();
    assert_eq!(rising, 3);
}

#[test]
fn glyph_rises_for_good_and_above() {
    let report = MockDataProvider.report_snapshot();
    let glyphs: Vec<bool> = report.class_wise.iter().map(|c| c.level().is_rising()).collect();
    assert_eq!(glyphs, vec![true; 5]);
    assert!(!TrendLevel::Fair.is_rising());
    assert!(!TrendLevel::Poor.is_rising());
}

#[test]
fn threshold_tables_stay_distinct() {
    assert_eq!(AttendanceBand::for_percentage(80), AttendanceBand::Good);
    assert_eq!(TrendLevel::for_attendance(80.0), TrendLevel::Good);
    assert_eq!(AttendanceBand::for_percentage(86), AttendanceBand::Excellent);
    assert_eq!(TrendLevel::for_attendance(86.0), TrendLevel::Good);
    assert_eq!(TrendLevel::for_attendance(75.0), TrendLevel::Fair);
}

#[test]
fn severities_from_strings() {
    assert_eq!(Severity::from_str_or_default("critical"), Severity::Critical);
    assert_eq!(Severity::from_str_or_default("warning"), Severity::Warning);
    assert_eq!(Severity::from_str_or_default("meh"), Severity::Warning);

    let critical = MockDataProvider
        .report_snapshot()
        .low_attendance
        .iter()
        .filter(|s| s.severity == Severity::Critical)
        .count();
    assert_eq!(critical, 2);
}

#[test]
fn generate_notices() {
    let pdf = ReportFormat::Pdf.generated_notice();
    assert_eq!(pdf.title, "PDF Report Generated");
    assert_eq!(
        pdf.description,
        "Your attendance report has been generated and will download shortly."
    );
    assert_eq!(ReportFormat::Excel.generated_notice().title, "EXCEL Report Generated");
}

#[test]
fn filter_selection_does_not_change_the_dataset() {
    let before = MockDataProvider.report_snapshot();
    let filter = ReportFilterState {
        selected_class: "10a".into(),
        report_type: "monthly".into(),
        ..ReportFilterState::default()
    };
    assert!(!filter.is_empty());
    assert_eq!(MockDataProvider.report_snapshot(), before);
}

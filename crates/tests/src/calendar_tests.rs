use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared_types::{
    month_grid, AttendanceDataProvider, AttendanceStatus, CalendarCell, CalendarRecords,
    MockDataProvider, MonthCursor,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn six_of_ten_present_is_sixty_percent() {
    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Leave,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
    ];
    let mut records = CalendarRecords::new();
    for (i, status) in statuses.iter().enumerate() {
        records.insert(ymd(2024, 1, 15 + i as u32), *status);
    }
    assert_eq!(records.total_recorded_days(), 10);
    assert_eq!(records.counts().present, 6);
    assert_eq!(records.attendance_percentage(), 60);
}

#[test]
fn mock_records_percentage_follows_formula() {
    let records = MockDataProvider.calendar_records();
    let counts = records.counts();
    let expected = (counts.present as f64 / 10.0 * 100.0).round() as u32;
    assert_eq!(records.attendance_percentage(), expected);
    assert_eq!(counts.total(), records.total_recorded_days());
}

#[test]
fn empty_calendar_is_zero_percent() {
    assert_eq!(CalendarRecords::new().attendance_percentage(), 0);
}

#[test]
fn january_2024_grid() {
    // 2024-01-01 was a Monday.
    let records = MockDataProvider.calendar_records();
    let cells = month_grid(MonthCursor::new(2024, 1), &records, ymd(2024, 1, 22));
    assert_eq!(cells.len(), 1 + 31);
    assert_eq!(cells[0], CalendarCell::Blank);

    let days: Vec<_> = cells
        .iter()
        .filter_map(|c| match c {
            CalendarCell::Day(d) => Some(*d),
            CalendarCell::Blank => None,
        })
        .collect();
    assert_eq!(days[16].status, Some(AttendanceStatus::Absent));
    assert_eq!(days[0].status, None);
    let today: Vec<u32> = days.iter().filter(|d| d.is_today).map(|d| d.day).collect();
    assert_eq!(today, vec![22]);
}

#[test]
fn cursor_crosses_year_boundaries() {
    let dec = MonthCursor::new(2023, 12);
    assert_eq!(dec.next(), MonthCursor::new(2024, 1));
    assert_eq!(MonthCursor::new(2024, 1).previous(), dec);
    assert_eq!(dec.title(), "December 2023");
}

#[test]
fn february_lengths() {
    assert_eq!(MonthCursor::new(2024, 2).days_in_month(), 29);
    assert_eq!(MonthCursor::new(2023, 2).days_in_month(), 28);
    assert_eq!(MonthCursor::new(1900, 2).days_in_month(), 28);
    assert_eq!(MonthCursor::new(2000, 2).days_in_month(), 29);
}

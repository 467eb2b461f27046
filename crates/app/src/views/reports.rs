use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdDownload, LdFileText, LdTrendingDown, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    ClassReport, LowAttendanceStudent, ReportFilterState, ReportFormat, SubjectReport,
    TrendDirection, MINIMUM_ATTENDANCE,
};
use shared_ui::{
    notify_success, use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardTitle, FormSelect, Input, Progress, StatTile, Tone,
};

use super::form_options;
use crate::context::use_data;
use crate::format_helpers::format_percent;
use crate::tones::{severity_tone, trend_tone};

#[component]
pub fn ReportsView() -> Element {
    let data = use_data();
    let report = use_hook(|| data.report_snapshot());
    let mut filter = use_signal(ReportFilterState::default);
    let toast = use_toast();

    let type_options = use_hook(|| form_options(data.report_type_options()));
    let class_options = use_hook(|| form_options(data.report_class_options()));
    let subject_options = use_hook(|| form_options(data.report_subject_options()));

    let generate = move |format: ReportFormat| {
        let selection = filter.read().clone();
        tracing::debug!(?selection, "report filter at generation");
        let notice = format.generated_notice();
        notify_success(&toast, notice.title, notice.description);
    };

    let summary = report.summary.clone();
    let current = filter.read().clone();

    rsx! {
        div { class: "view-stack",
            Card {
                CardHeader {
                    CardTitle { icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
                        "Generate Attendance Report"
                    }
                }
                CardContent {
                    div { class: "filter-grid",
                        FormSelect {
                            label: "Report Type",
                            placeholder: "Select type",
                            value: current.report_type.clone(),
                            options: type_options,
                            on_change: move |value: String| filter.write().report_type = value,
                        }
                        FormSelect {
                            label: "Class",
                            placeholder: "Select class",
                            value: current.selected_class.clone(),
                            options: class_options,
                            on_change: move |value: String| filter.write().selected_class = value,
                        }
                        FormSelect {
                            label: "Subject",
                            placeholder: "Select subject",
                            value: current.selected_subject.clone(),
                            options: subject_options,
                            on_change: move |value: String| filter.write().selected_subject = value,
                        }
                        Input {
                            label: "From Date",
                            input_type: "date",
                            value: current.date_range.from.clone(),
                            on_input: move |value: String| filter.write().date_range.from = value,
                        }
                        Input {
                            label: "To Date",
                            input_type: "date",
                            value: current.date_range.to.clone(),
                            on_input: move |value: String| filter.write().date_range.to = value,
                        }
                    }
                    div { class: "action-row",
                        Button { onclick: move |_| generate(ReportFormat::Pdf),
                            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                            "Generate PDF"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| generate(ReportFormat::Excel),
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                            "Generate Excel"
                        }
                    }
                }
            }

            div { class: "stat-grid",
                StatTile {
                    label: "Total Students",
                    value: "{summary.total_students}",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
                }
                div { class: "stat-with-bar",
                    StatTile {
                        label: "Average Attendance",
                        value: format_percent(summary.average_attendance),
                        tone: Tone::Success,
                        icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 } },
                    }
                    Progress { value: summary.average_attendance }
                }
                StatTile {
                    label: "Total Classes",
                    value: "{summary.total_classes}",
                    tone: Tone::Info,
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
                }
                StatTile {
                    label: "Low Attendance",
                    value: "{summary.low_attendance_count}",
                    caption: "Students below {MINIMUM_ATTENDANCE}%",
                    tone: Tone::Danger,
                    icon: rsx! { Icon::<LdTrendingDown> { icon: LdTrendingDown, width: 22, height: 22 } },
                }
            }

            Card {
                CardHeader { CardTitle { "Class-wise Attendance Performance" } }
                CardContent {
                    ul { class: "row-list",
                        for row in report.class_wise.iter() {
                            ClassRow { key: "{row.class_name}", report: row.clone() }
                        }
                    }
                }
            }

            div { class: "two-column",
                Card {
                    CardHeader { CardTitle { "Subject-wise Attendance" } }
                    CardContent {
                        ul { class: "row-list",
                            for subject in report.subject_wise.iter() {
                                SubjectRow { key: "{subject.subject}", subject: subject.clone() }
                            }
                        }
                    }
                }
                Card { tone: Tone::Danger,
                    CardHeader { CardTitle { "Students Needing Attention" } }
                    CardContent {
                        ul { class: "row-list",
                            for student in report.low_attendance.iter() {
                                LowAttendanceRow { key: "{student.name}", student: student.clone() }
                            }
                        }
                    }
                    CardFooter {
                        Button { class: "full-width", variant: ButtonVariant::Outline, "Contact Parents" }
                    }
                }
            }
        }
    }
}

#[component]
fn ClassRow(report: ClassReport) -> Element {
    let level = report.level();
    // Glyph follows the level; colour follows the recorded direction.
    let glyph_up = level.is_rising();
    let rising = report.trend == TrendDirection::Up;

    rsx! {
        li { class: "row-item",
            div { class: "row-lead",
                span { class: "class-chip", "{report.short_label()}" }
                div {
                    p { class: "row-title", "{report.class_name}" }
                    p { class: "row-meta", "{report.students} students" }
                }
            }
            div { class: "row-trail",
                div { class: "row-figure",
                    p { class: "row-value", "{format_percent(report.attendance)}" }
                    Badge { variant: BadgeVariant::Soft, tone: trend_tone(level), "{level.label()}" }
                }
                span {
                    class: "trend-icon",
                    "data-rising": if rising { "true" } else { "false" },
                    "data-glyph": if glyph_up { "up" } else { "down" },
                    if glyph_up {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                    } else {
                        Icon::<LdTrendingDown> { icon: LdTrendingDown, width: 20, height: 20 }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectRow(subject: SubjectReport) -> Element {
    rsx! {
        li { class: "row-item row-item-muted",
            div {
                p { class: "row-title", "{subject.subject}" }
                p { class: "row-meta", "{subject.classes} classes" }
            }
            div { class: "row-figure",
                p { class: "row-value", "{format_percent(subject.attendance)}" }
                Progress { class: "mini-bar", value: subject.attendance }
            }
        }
    }
}

#[component]
fn LowAttendanceRow(student: LowAttendanceStudent) -> Element {
    rsx! {
        li { class: "row-item row-item-alert",
            div {
                p { class: "row-title", "{student.name}" }
                p { class: "row-meta", "{student.class_name}" }
            }
            div { class: "row-figure",
                p { class: "row-value", "data-tone": "danger", "{student.attendance}%" }
                Badge {
                    variant: BadgeVariant::Soft,
                    tone: severity_tone(student.severity),
                    "{student.severity.as_str()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    #[test]
    fn class_row_shows_short_label_and_level() {
        let html = dioxus_ssr::render_element(rsx! {
            ClassRow {
                report: ClassReport {
                    class_name: "10th A".to_string(),
                    students: 32,
                    attendance: 92.3,
                    trend: TrendDirection::Up,
                }
            }
        });
        assert!(html.contains(">10th<"), "{html}");
        assert!(html.contains("92.3%"), "{html}");
        assert!(html.contains("Excellent"), "{html}");
        assert!(html.contains("data-rising=\"true\""), "{html}");
        assert!(html.contains("data-glyph=\"up\""), "{html}");
    }

    #[test]
    fn falling_class_row() {
        let html = dioxus_ssr::render_element(rsx! {
            ClassRow {
                report: ClassReport {
                    class_name: "11th B".to_string(),
                    students: 25,
                    attendance: 76.0,
                    trend: TrendDirection::Down,
                }
            }
        });
        assert!(html.contains("Fair"), "{html}");
        assert!(html.contains("data-rising=\"false\""), "{html}");
        assert!(html.contains("data-glyph=\"down\""), "{html}");
    }

    #[test]
    fn good_class_trending_down_keeps_up_glyph_in_falling_colour() {
        let html = dioxus_ssr::render_element(rsx! {
            ClassRow {
                report: ClassReport {
                    class_name: "10th B".to_string(),
                    students: 28,
                    attendance: 89.1,
                    trend: TrendDirection::Down,
                }
            }
        });
        assert!(html.contains("Good"), "{html}");
        assert!(html.contains("data-glyph=\"up\""), "{html}");
        assert!(html.contains("data-rising=\"false\""), "{html}");
    }

    #[test]
    fn low_attendance_row_shows_severity() {
        let html = dioxus_ssr::render_element(rsx! {
            LowAttendanceRow {
                student: LowAttendanceStudent {
                    name: "John Smith".to_string(),
                    class_name: "10th A".to_string(),
                    attendance: 65,
                    severity: Severity::Critical,
                }
            }
        });
        assert!(html.contains("65%"), "{html}");
        assert!(html.contains("critical"), "{html}");
        assert!(html.contains("data-tone=\"danger\""), "{html}");
    }
}

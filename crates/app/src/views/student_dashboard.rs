use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAward, LdCalendar, LdClock, LdTrendingUp, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{minimum_requirement_message, StudentDashboardSnapshot};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Progress,
    StatTile, Tone,
};

use crate::context::use_data;
use crate::format_helpers::format_date_human;
use crate::tones::{band_tone, percentage_tone, status_tone};

#[component]
pub fn StudentDashboard() -> Element {
    let data = use_data();
    let snapshot = use_hook(|| data.student_dashboard());

    rsx! {
        div { class: "view-stack",
            OverviewRow { snapshot: snapshot.clone() }
            div { class: "two-column",
                RecentAttendanceCard { snapshot: snapshot.clone() }
                TodaysClassesCard { snapshot: snapshot.clone() }
            }
            SubjectBreakdown { snapshot: snapshot.clone() }
            RewardsCard { snapshot }
        }
    }
}

#[component]
fn OverviewRow(snapshot: StudentDashboardSnapshot) -> Element {
    let band = snapshot.band();
    let overall = snapshot.overall_attendance;
    let next = snapshot.next_class_label();

    rsx! {
        div { class: "stat-grid",
            div { class: "stat-with-bar",
                StatTile {
                    label: "Overall Attendance",
                    value: "{overall}%",
                    caption: "{snapshot.attended_classes}/{snapshot.total_classes} classes attended",
                    tone: band_tone(band),
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 } },
                }
                Progress { value: overall as f64, tone: band_tone(band) }
            }
            StatTile {
                label: "Reward Points",
                value: "{snapshot.rewards.points}",
                caption: "{snapshot.rewards.current_streak} day streak",
                tone: Tone::Info,
                icon: rsx! { Icon::<LdAward> { icon: LdAward, width: 22, height: 22 } },
            }
            StatTile {
                label: "Classes Today",
                value: "{snapshot.classes_today()}",
                caption: "Next: {next}",
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
            }
            div { class: "stat-tile", "data-tone": percentage_tone(overall).as_str(),
                div { class: "stat-tile-head",
                    span { class: "stat-label", "Status" }
                    span { class: "stat-icon",
                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 22, height: 22 }
                    }
                }
                Badge { variant: BadgeVariant::Soft, tone: band_tone(band), "{band.label()}" }
                span { class: "stat-caption", "{minimum_requirement_message(overall)}" }
            }
        }
    }
}

#[component]
fn RecentAttendanceCard(snapshot: StudentDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                    "Recent Attendance"
                }
            }
            CardContent {
                ul { class: "row-list",
                    for (i, record) in snapshot.recent_attendance.iter().enumerate() {
                        li { key: "{i}", class: "row-item",
                            div {
                                p { class: "row-title", "{record.subject}" }
                                p { class: "row-meta", "{format_date_human(&record.date)}" }
                            }
                            Badge {
                                variant: BadgeVariant::Soft,
                                tone: status_tone(record.status),
                                "{record.status.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TodaysClassesCard(snapshot: StudentDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
                    "Today's Classes"
                }
            }
            CardContent {
                if snapshot.upcoming_classes.is_empty() {
                    p { class: "empty-note", "No more classes" }
                }
                ul { class: "row-list",
                    for (i, class) in snapshot.upcoming_classes.iter().enumerate() {
                        li { key: "{i}", class: "row-item row-item-accent",
                            div {
                                p { class: "row-title", "{class.subject}" }
                                p { class: "row-meta", "{class.room}" }
                            }
                            Badge { variant: BadgeVariant::Outline, tone: Tone::Info, "{class.time}" }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "full-width",
                    onclick: move |_| tracing::debug!("full schedule requested"),
                    "View Full Schedule"
                }
            }
        }
    }
}

#[component]
fn SubjectBreakdown(snapshot: StudentDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "Subject-wise Attendance" } }
            CardContent {
                div { class: "tile-grid",
                    for subject in snapshot.subject_wise.iter() {
                        div { key: "{subject.subject}", class: "subject-tile",
                            div { class: "subject-tile-head",
                                h4 { "{subject.subject}" }
                                span { class: "subject-tile-pct", "{subject.attendance}%" }
                            }
                            Progress {
                                value: subject.attendance as f64,
                                tone: percentage_tone(subject.attendance),
                            }
                            p { class: "row-meta",
                                "{subject.attended_classes()}/{subject.total} classes"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RewardsCard(snapshot: StudentDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdAward> { icon: LdAward, width: 18, height: 18 } },
                    "Achievements & Rewards"
                }
            }
            CardContent {
                div { class: "two-column",
                    div {
                        h4 { class: "section-label", "Your Badges" }
                        div { class: "badge-row",
                            for badge in snapshot.rewards.badges.iter() {
                                Badge { key: "{badge}", variant: BadgeVariant::Soft, tone: Tone::Info, "{badge}" }
                            }
                        }
                    }
                    div {
                        h4 { class: "section-label", "Current Streak" }
                        div { class: "streak",
                            span { class: "streak-count", "{snapshot.rewards.current_streak}" }
                            div {
                                p { class: "row-title", "Perfect Attendance Days" }
                                p { class: "row-meta", "Keep it up!" }
                            }
                        }
                    }
                }
            }
        }
    }
}

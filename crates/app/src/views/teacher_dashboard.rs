use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdClipboardList, LdClock, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{StudentStanding, TeacherDashboardSnapshot};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Progress,
    StatTile, Tone,
};

use crate::context::{use_data, use_shell};

/// Dashboard for teachers; heads of department and admins see it too.
#[component]
pub fn TeacherDashboard() -> Element {
    let data = use_data();
    let snapshot = use_hook(|| data.teacher_dashboard());

    rsx! {
        div { class: "view-stack",
            OverviewRow { snapshot: snapshot.clone() }
            div { class: "two-column",
                ScheduleCard { snapshot: snapshot.clone() }
                PendingTasksCard { snapshot: snapshot.clone() }
            }
            div { class: "wide-left",
                ActivityCard { snapshot: snapshot.clone() }
                QuickActions {}
            }
            div { class: "two-column",
                StandingCard {
                    title: "Top Performers",
                    tone: Tone::Success,
                    students: snapshot.top_performers.clone(),
                }
                StandingCard {
                    title: "Needs Attention",
                    tone: Tone::Danger,
                    students: snapshot.low_attendance.clone(),
                    footer_action: "Contact Parents",
                }
            }
        }
    }
}

#[component]
fn OverviewRow(snapshot: TeacherDashboardSnapshot) -> Element {
    let stats = &snapshot.class_stats;

    rsx! {
        div { class: "stat-grid",
            StatTile {
                label: "Today's Classes",
                value: "{snapshot.todays_classes.len()}",
                caption: "{snapshot.marked_count()} marked, {snapshot.pending_count()} pending",
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 22, height: 22 } },
            }
            StatTile {
                label: "Total Students",
                value: "{stats.total_students}",
                caption: "{stats.present_today} present today",
                tone: Tone::Success,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
            }
            div { class: "stat-with-bar",
                StatTile {
                    label: "Avg. Attendance",
                    value: "{stats.average_attendance}%",
                    tone: Tone::Info,
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 } },
                }
                Progress { value: stats.average_attendance, tone: Tone::Info }
            }
            StatTile {
                label: "Pending Tasks",
                value: "{snapshot.pending_task_total()}",
                caption: "Requires your attention",
                tone: Tone::Danger,
                icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 22, height: 22 } },
            }
        }
    }
}

#[component]
fn ScheduleCard(snapshot: TeacherDashboardSnapshot) -> Element {
    let mut shell = use_shell();

    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
                    "Today's Classes"
                }
            }
            CardContent {
                ul { class: "row-list",
                    for (i, class) in snapshot.todays_classes.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: "schedule-item",
                            "data-tone": if class.marked { "success" } else { "danger" },
                            div { class: "row-item",
                                div {
                                    p { class: "row-title", "{class.subject} - {class.class_name}" }
                                    p { class: "row-meta", "{class.room}" }
                                }
                                div { class: "badge-row",
                                    Badge { variant: BadgeVariant::Outline, tone: Tone::Neutral, "{class.time}" }
                                    if class.marked {
                                        Badge { variant: BadgeVariant::Soft, tone: Tone::Success, "Marked" }
                                    } else {
                                        Badge { variant: BadgeVariant::Soft, tone: Tone::Danger, "Pending" }
                                    }
                                }
                            }
                            if !class.marked {
                                Button {
                                    class: "full-width",
                                    onclick: move |_| shell.write().navigate("mark-attendance"),
                                    "Mark Attendance"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PendingTasksCard(snapshot: TeacherDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
                    "Pending Tasks"
                }
            }
            CardContent {
                ul { class: "row-list",
                    for task in snapshot.pending_tasks.iter() {
                        li { key: "{task.kind}", class: "row-item",
                            div {
                                p { class: "row-title", "{task.label}" }
                                p { class: "row-meta", "Requires action" }
                            }
                            Badge { tone: Tone::Danger, "{task.count}" }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "full-width",
                    onclick: move |_| tracing::debug!("task list requested"),
                    "View All Tasks"
                }
            }
        }
    }
}

#[component]
fn ActivityCard(snapshot: TeacherDashboardSnapshot) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                    "Recent Activity"
                }
            }
            CardContent {
                ul { class: "row-list",
                    for (i, item) in snapshot.recent_activity.iter().enumerate() {
                        li { key: "{i}", class: "activity-item",
                            span { class: "activity-dot" }
                            div { class: "activity-body",
                                p { class: "row-title", "{item.action}" }
                                p { class: "row-meta", "{item.context()}" }
                            }
                            span { class: "row-meta", "{item.time}" }
                        }
                    }
                }
            }
        }
    }
}

/// Shortcuts into the other portal pages.
#[component]
fn QuickActions() -> Element {
    let mut shell = use_shell();

    rsx! {
        Card {
            CardHeader { CardTitle { "Quick Actions" } }
            CardContent { class: "action-stack",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| shell.write().navigate("mark-attendance"),
                    Icon::<LdClipboardList> { icon: LdClipboardList, width: 16, height: 16 }
                    "Mark Attendance"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| shell.write().navigate("students"),
                    Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                    "View Students"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| shell.write().navigate("schedule"),
                    Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                    "Class Schedule"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| shell.write().navigate("reports"),
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
                    "Generate Report"
                }
            }
        }
    }
}

#[component]
fn StandingCard(
    title: String,
    tone: Tone,
    students: Vec<StudentStanding>,
    #[props(default)] footer_action: String,
) -> Element {
    rsx! {
        Card { tone: tone,
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                ul { class: "row-list",
                    for student in students.iter() {
                        li { key: "{student.name}", class: "row-item", "data-tone": tone.as_str(),
                            div {
                                p { class: "row-title", "{student.name}" }
                                p { class: "row-meta", "{student.class_name}" }
                            }
                            Badge { variant: BadgeVariant::Soft, tone: tone, "{student.attendance}%" }
                        }
                    }
                }
                if !footer_action.is_empty() {
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "full-width",
                        onclick: move |_| tracing::debug!("contact parents requested"),
                        "{footer_action}"
                    }
                }
            }
        }
    }
}

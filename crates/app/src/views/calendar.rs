use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;
use shared_types::{month_grid, CalendarCell, MonthCursor, ALL_STATUSES, WEEKDAY_HEADERS};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::context::use_data;
use crate::format_helpers::today;
use crate::tones::status_tone;

/// Month grid of recorded attendance with per-status totals.
#[component]
pub fn CalendarView() -> Element {
    let data = use_data();
    let records = use_hook(|| data.calendar_records());
    let mut cursor = use_signal(|| MonthCursor::containing(today()));

    let current = cursor();
    let cells = month_grid(current, &records, today());
    let counts = records.counts();
    let percentage = records.attendance_percentage();

    rsx! {
        div { class: "view-stack",
            div { class: "calendar-layout",
                Card { class: "calendar-card",
                    CardHeader { class: "calendar-header",
                        CardTitle { icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
                            "Attendance Calendar"
                        }
                        div { class: "month-nav",
                            Button {
                                variant: ButtonVariant::Outline,
                                title: "Previous month",
                                onclick: move |_| cursor.set(current.previous()),
                                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                            }
                            h3 { class: "month-title", "{current.title()}" }
                            Button {
                                variant: ButtonVariant::Outline,
                                title: "Next month",
                                onclick: move |_| cursor.set(current.next()),
                                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                            }
                        }
                    }
                    CardContent {
                        div { class: "calendar-grid",
                            for header in WEEKDAY_HEADERS {
                                div { key: "{header}", class: "calendar-weekday", "{header}" }
                            }
                            for (i, cell) in cells.into_iter().enumerate() {
                                match cell {
                                    CalendarCell::Blank => rsx! {
                                        div { key: "blank-{i}", class: "calendar-cell calendar-cell-blank" }
                                    },
                                    CalendarCell::Day(day) => rsx! {
                                        div {
                                            key: "day-{day.day}",
                                            class: "calendar-cell",
                                            "data-today": if day.is_today { "true" } else { "false" },
                                            "data-tone": day.status.map(|s| status_tone(s).as_str()).unwrap_or("none"),
                                            title: day.status.map(|s| s.label()).unwrap_or(""),
                                            span { "{day.day}" }
                                        }
                                    },
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Monthly Stats" } }
                    CardContent {
                        div { class: "headline-stat",
                            span { class: "headline-value", "{percentage}%" }
                            p { class: "row-meta", "Overall Attendance" }
                        }
                        ul { class: "row-list",
                            for status in ALL_STATUSES.iter().copied() {
                                li { key: "{status.as_str()}", class: "legend-row",
                                    span { class: "legend-swatch", "data-tone": status_tone(status).as_str() }
                                    span { class: "legend-label", "{status.label()}" }
                                    Badge {
                                        variant: BadgeVariant::Soft,
                                        tone: status_tone(status),
                                        "{counts.get(status)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Legend" } }
                CardContent {
                    div { class: "legend",
                        for status in ALL_STATUSES.iter().copied() {
                            div { key: "{status.as_str()}", class: "legend-item",
                                Badge { tone: status_tone(status), "{status.legend_code()}" }
                                span { "{status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

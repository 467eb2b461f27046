use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSave, LdUserCheck, LdUsers, LdX};
use dioxus_free_icons::Icon;
use shared_types::{BulkEditor, MarkStatus, ALL_MARK_STATUSES};
use shared_ui::{
    notify_success, use_toast, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormSelect, SearchBar, StatTile, Tone, ToastOptions,
};

use super::form_options;
use crate::context::{use_data, use_store};
use crate::format_helpers::today;
use crate::tones::mark_tone;

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}

/// Roster marking form: pick class and subject, set each student's status,
/// then save.
#[component]
pub fn BulkEditorView() -> Element {
    let data = use_data();
    let store = use_store();
    let toast = use_toast();

    let mut editor = use_signal(|| BulkEditor::new(data.roster()));
    let mut search = use_signal(String::new);
    let class_options = use_hook(|| form_options(data.class_options()));
    let subject_options = use_hook(|| form_options(data.subject_options()));

    let stats = editor.read().stats();
    let can_load = editor.read().can_load();
    let selected_class = editor.read().selected_class().to_string();
    let selected_subject = editor.read().selected_subject().to_string();
    let visible: Vec<_> = editor
        .read()
        .filter(&search.read())
        .into_iter()
        .cloned()
        .collect();

    let handle_save = move |_| {
        let result = editor.read().save(&*store, today());
        match result {
            Ok(notice) => notify_success(&toast, notice.title, notice.description),
            Err(e) => {
                tracing::error!(error = %e, "attendance save failed");
                toast.error(e.friendly_message(), ToastOptions::new());
            }
        }
    };

    rsx! {
        div { class: "view-stack",
            Card {
                CardHeader {
                    CardTitle { icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                        "Bulk Attendance Marking"
                    }
                    CardDescription { "Choose a class and subject, then mark each student." }
                }
                CardContent { class: "selector-row",
                    FormSelect {
                        label: "Select Class",
                        placeholder: "Choose class",
                        value: selected_class,
                        options: class_options,
                        on_change: move |value: String| editor.write().select_class(value),
                    }
                    FormSelect {
                        label: "Select Subject",
                        placeholder: "Choose subject",
                        value: selected_subject,
                        options: subject_options,
                        on_change: move |value: String| editor.write().select_subject(value),
                    }
                    Button {
                        disabled: !can_load,
                        onclick: move |_| editor.read().load(),
                        "Load Students"
                    }
                }
            }

            div { class: "stat-grid",
                StatTile { label: "Total Students", value: "{stats.total}" }
                StatTile { label: "Present", value: "{stats.present}", tone: Tone::Success }
                StatTile { label: "Absent", value: "{stats.absent}", tone: Tone::Danger }
                StatTile { label: "Late", value: "{stats.late}", tone: Tone::Warning }
            }

            Card {
                CardContent {
                    SearchBar {
                        value: search(),
                        on_search: move |value: String| search.set(value),
                        placeholder: "Search students...",
                        div { class: "toolbar-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| editor.write().set_all_status(MarkStatus::Present),
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                                "Mark All Present"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| editor.write().set_all_status(MarkStatus::Absent),
                                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                                "Mark All Absent"
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Students Attendance" } }
                CardContent {
                    if visible.is_empty() {
                        p { class: "empty-note", "No students match your search." }
                    }
                    ul { class: "row-list",
                        for row in visible {
                            li { key: "{row.id}", class: "roster-row",
                                div { class: "roster-student",
                                    span { class: "user-avatar", "{initial(&row.name)}" }
                                    div {
                                        p { class: "row-title", "{row.name}" }
                                        p { class: "row-meta", "Roll: {row.roll_number}" }
                                    }
                                }
                                div { class: "status-toggle",
                                    for status in ALL_MARK_STATUSES.iter().copied() {
                                        Button {
                                            key: "{status.as_str()}",
                                            variant: ButtonVariant::Outline,
                                            pressed: row.status == status,
                                            tone: mark_tone(status),
                                            onclick: {
                                                let id = row.id.clone();
                                                move |_| {
                                                    editor.write().set_status(&id, status);
                                                }
                                            },
                                            "{status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "save-row",
                Button { onclick: handle_save,
                    Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                    "Save Attendance"
                }
            }
        }
    }
}

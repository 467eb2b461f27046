mod bulk_editor;
mod calendar;
mod placeholder;
mod reports;
mod student_dashboard;
mod teacher_dashboard;

use dioxus::prelude::*;
use shared_types::{SelectOption, ViewVariant};
use shared_ui::FormOption;

use bulk_editor::BulkEditorView;
use calendar::CalendarView;
use placeholder::Placeholder;
use reports::ReportsView;
use student_dashboard::StudentDashboard;
use teacher_dashboard::TeacherDashboard;

/// Body of the shell for the selected view.
#[component]
pub fn ActiveView(view: ViewVariant) -> Element {
    match view {
        ViewVariant::StudentDashboard => rsx! { StudentDashboard {} },
        ViewVariant::TeacherDashboard => rsx! { TeacherDashboard {} },
        ViewVariant::Calendar => rsx! { CalendarView {} },
        ViewVariant::BulkEditor => rsx! { BulkEditorView {} },
        ViewVariant::Reports => rsx! { ReportsView {} },
        ViewVariant::Placeholder => rsx! { Placeholder {} },
    }
}

/// Provider options in the shape the select widget takes.
fn form_options(options: Vec<SelectOption>) -> Vec<FormOption> {
    options
        .into_iter()
        .map(|o| FormOption::new(o.value, o.label))
        .collect()
}

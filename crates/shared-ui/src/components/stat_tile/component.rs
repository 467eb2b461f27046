use dioxus::prelude::*;

use crate::theme::Tone;

/// Headline number with a caption, used in the summary rows of every view.
#[component]
pub fn StatTile(
    label: String,
    value: String,
    #[props(default)] caption: String,
    #[props(default)] tone: Tone,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        div { class: "stat-tile", "data-tone": tone.as_str(),
            div { class: "stat-tile-head",
                span { class: "stat-label", "{label}" }
                if let Some(icon) = icon {
                    span { class: "stat-icon", {icon} }
                }
            }
            span { class: "stat-value", "{value}" }
            if !caption.is_empty() {
                span { class: "stat-caption", "{caption}" }
            }
        }
    }
}

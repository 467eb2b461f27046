use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

use crate::theme::Tone;

/// Horizontal bar filled to `value` percent (0..=100, clamped).
#[component]
pub fn Progress(
    value: f64,
    #[props(default)] tone: Tone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let value = clamp_percent(value);
    let base = vec![
        Attribute::new("class", "progress", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        prim::Progress {
            value: Some(value),
            max: 100.0,
            attributes: merged,
            prim::ProgressIndicator {
                class: "progress-indicator",
                style: "width: {value}%",
            }
        }
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

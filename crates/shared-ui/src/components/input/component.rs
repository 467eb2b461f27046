use dioxus::prelude::*;

/// Labelled text input. `on_input` receives the raw value on every keystroke.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Icon drawn inside the field, left of the text.
    #[props(default)]
    leading: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_leading = leading.is_some();

    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div {
                class: "input-field",
                "data-leading": if has_leading { "true" } else { "false" },
                if let Some(icon) = leading {
                    span { class: "input-leading", {icon} }
                }
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_input.call(evt.value()),
                    ..merged,
                }
            }
        }
    }
}

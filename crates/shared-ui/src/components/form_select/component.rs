use dioxus::prelude::*;

/// One entry of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

impl FormOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` driven by a list of options.
///
/// When `placeholder` is set, an empty-valued disabled first option is
/// shown until the user picks something.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    options: Vec<FormOption>,
    /// Receives the newly selected value.
    #[props(default)]
    on_change: Option<EventHandler<String>>,
    #[props(default)]
    label: String,
    #[props(default)]
    placeholder: String,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &on_change {
                        handler.call(evt.value());
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<FormOption> {
        vec![FormOption::new("10a", "10th A"), FormOption::new("10b", "10th B")]
    }

    #[test]
    fn renders_every_option() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { label: "Class", options: classes() }
        });
        assert!(html.contains("10th A"));
        assert!(html.contains("10th B"));
        assert!(html.contains("form-select-label"), "{html}");
    }

    #[test]
    fn placeholder_only_when_requested() {
        let with = dioxus_ssr::render_element(rsx! {
            FormSelect { placeholder: "Select class", options: classes() }
        });
        let without = dioxus_ssr::render_element(rsx! {
            FormSelect { options: classes() }
        });
        assert!(with.contains("Select class"));
        assert!(!without.contains("Select class"));
        assert!(!without.contains("form-select-label"), "{without}");
    }
}

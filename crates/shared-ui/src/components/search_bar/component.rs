use dioxus::prelude::*;

/// Filter row: a search field followed by any extra controls.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div { class: "search-bar",
            input {
                class: "input search-bar-input",
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_search.call(evt.value()),
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_term_and_placeholder() {
        let html = dioxus_ssr::render_element(rsx! {
            SearchBar { value: "alice", on_search: move |_| {}, placeholder: "Search students..." }
        });
        assert!(html.contains("value=\"alice\""), "{html}");
        assert!(html.contains("Search students..."));
    }
}

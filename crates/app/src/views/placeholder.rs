use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdClock;
use dioxus_free_icons::Icon;

/// Shown for every page without a dedicated view.
#[component]
pub fn Placeholder() -> Element {
    rsx! {
        div { class: "placeholder",
            div { class: "placeholder-icon",
                Icon::<LdClock> { icon: LdClock, width: 32, height: 32 }
            }
            h2 { class: "placeholder-title", "Coming Soon" }
            p { class: "placeholder-text", "This feature is under development." }
        }
    }
}

use dioxus::prelude::*;

use crate::theme::Tone;

/// Panel container. A non-neutral `tone` draws an accent border.
#[component]
pub fn Card(
    #[props(default)] tone: Tone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![Attribute::new("class", "card", None, false)];
    if tone != Tone::Neutral {
        base.push(Attribute::new("data-tone", tone.as_str(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Heading with an optional leading icon.
#[component]
pub fn CardTitle(
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            if let Some(icon) = icon {
                span { class: "card-title-icon", {icon} }
            }
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_card_has_no_accent() {
        let html = dioxus_ssr::render_element(rsx! {
            Card {
                CardHeader { CardTitle { "Monthly Stats" } }
                CardContent { "body" }
            }
        });
        assert!(!html.contains("data-tone"), "{html}");
        assert!(html.contains("Monthly Stats"));
        assert!(!html.contains("card-title-icon"), "{html}");
    }

    #[test]
    fn toned_card_and_title_icon() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { tone: Tone::Warning,
                CardTitle { icon: rsx! { i { "!" } }, "Low Attendance Alert" }
            }
        });
        assert!(html.contains("data-tone=\"warning\""), "{html}");
        assert!(html.contains("card-title-icon"), "{html}");
    }
}

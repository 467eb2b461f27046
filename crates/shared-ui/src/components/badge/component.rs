use dioxus::prelude::*;

use crate::theme::Tone;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Filled with the tone colour.
    #[default]
    Solid,
    /// Tinted background, coloured text.
    Soft,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Solid => "solid",
            BadgeVariant::Soft => "soft",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for a status, band or count.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] tone: Tone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

use dioxus::prelude::*;

const KIT_CSS: Asset = asset!("/assets/kit.css");

/// Semantic colour applied through the `data-tone` attribute.
///
/// Widgets never know what a tone means; callers map their own states
/// (attendance status, severity, trend) onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Danger,
    Warning,
    Info,
}

/// All tones in stylesheet order.
pub const ALL_TONES: &[Tone] = &[
    Tone::Neutral,
    Tone::Success,
    Tone::Danger,
    Tone::Warning,
    Tone::Info,
];

impl Tone {
    /// Value written to `data-tone`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Success => "success",
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Info => "info",
        }
    }

    /// Parse a tone key, falling back to Neutral.
    pub fn from_key(s: &str) -> Self {
        match s {
            "success" => Tone::Success,
            "danger" => Tone::Danger,
            "warning" => Tone::Warning,
            "info" => Tone::Info,
            _ => Tone::Neutral,
        }
    }
}

/// Stylesheet for every widget in this crate. Mount once near the root.
#[component]
pub fn KitStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: KIT_CSS }
    }
}

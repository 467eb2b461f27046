use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastType, Toasts};

/// Hosts the toast stack for its subtree.
#[component]
pub fn ToastProvider(mut props: prim::ToastProviderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toast-region", None, false));

    rsx! {
        prim::ToastProvider { ..props }
    }
}

/// Show a titled confirmation with a body line.
pub fn notify_success(toasts: &Toasts, title: impl Into<String>, description: impl Into<String>) {
    toasts.success(title.into(), ToastOptions::new().description(description.into()));
}

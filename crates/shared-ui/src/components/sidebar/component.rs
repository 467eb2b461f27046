use dioxus::prelude::*;

// ─── Layout components ─────────────────────────────────────────────────

/// Page frame holding the drawer and the inset content side by side.
#[component]
pub fn SidebarProvider(open: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if open { "true" } else { "false" },
            {children}
        }
    }
}

/// Navigation drawer. Open/closed state is owned by the caller.
///
/// Always visible on wide viewports; on narrow ones it slides in when
/// `open` and shows a backdrop that calls `on_close` when tapped.
#[component]
pub fn Sidebar(
    open: bool,
    on_close: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", if open { "open" } else { "closed" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu entry. `active` marks the current page.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Header button that opens or closes the drawer on narrow viewports.
#[component]
pub fn SidebarTrigger(
    onclick: EventHandler<MouseEvent>,
    #[props(default = "Toggle navigation".to_string())] label: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Main content area next to the drawer.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}

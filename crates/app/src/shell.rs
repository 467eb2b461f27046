use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLogOut, LdMenu, LdX};
use dioxus_free_icons::Icon;
use shared_types::UiConfig;
use shared_ui::{
    Button, ButtonVariant, Separator, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger,
};

use crate::context::use_shell;
use crate::format_helpers::{format_header_date, today};
use crate::icons::NavGlyph;
use crate::views::ActiveView;

/// Persistent frame: navigation drawer, header, and the active view.
#[component]
pub fn Shell() -> Element {
    let mut shell = use_shell();
    let ui = use_context::<UiConfig>();

    let state = shell.read();
    let drawer_open = state.drawer_open();
    let active_page = state.active_page().to_string();
    let menu = state.menu();
    let page_title = state.page_title();
    let portal_label = state.portal_label();
    let initial = state.user_initial();
    let user_name = state.session().name.clone();
    let role_label = state.session().role.display_name();
    let view = state.view();
    drop(state);

    let date_label = format_header_date(today());

    rsx! {
        SidebarProvider { open: drawer_open,
            Sidebar {
                open: drawer_open,
                on_close: move |_| shell.write().close_drawer(),

                SidebarHeader {
                    div { class: "brand",
                        span { class: "brand-mark",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                        }
                        div { class: "brand-text",
                            span { class: "brand-name", "{ui.brand}" }
                            span { class: "brand-portal", "{portal_label}" }
                        }
                        button {
                            class: "drawer-close",
                            r#type: "button",
                            "aria-label": "Close navigation",
                            onclick: move |_| shell.write().close_drawer(),
                            Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                        }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for entry in menu.iter().copied() {
                            SidebarMenuItem { key: "{entry.page_key}",
                                SidebarMenuButton {
                                    active: entry.is_active(&active_page),
                                    onclick: move |_| shell.write().navigate(entry.page_key),
                                    NavGlyph { icon: entry.icon }
                                    span { "{entry.label}" }
                                }
                            }
                        }
                    }
                }

                Separator {}
                SidebarFooter {
                    div { class: "user-chip",
                        span { class: "user-avatar", "{initial}" }
                        div { class: "user-chip-text",
                            span { class: "user-chip-name", "{user_name}" }
                            span { class: "user-chip-role", "{role_label}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "logout-button",
                        // No authentication exists; signing out only records the click.
                        onclick: move |_| tracing::info!("logout requested"),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        onclick: move |_| shell.write().toggle_drawer(),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h2 { class: "app-header-title", "{page_title}" }
                    div { class: "app-header-spacer" }
                    div { class: "app-header-user",
                        span { class: "app-header-name", "{user_name}" }
                        span { class: "app-header-date", "{date_label}" }
                    }
                }
                main { class: "page-content",
                    ActiveView { view }
                }
            }
        }
    }
}

use serde::Serialize;

use crate::models::User;
use crate::navigation::{menu_for, page_title, NavigationEntry};
use crate::view::{select, ViewVariant};

/// Page shown when the shell is first constructed.
pub const HOME_PAGE: &str = "dashboard";

/// State of the persistent page frame: who is signed in, which page is
/// active, and whether the navigation drawer is open.
///
/// Every transition is synchronous; none of them touch URL or history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShellState {
    session: User,
    active_page: String,
    drawer_open: bool,
}

impl ShellState {
    pub fn new(session: User) -> Self {
        Self {
            session,
            active_page: HOME_PAGE.to_string(),
            drawer_open: false,
        }
    }

    pub fn with_drawer_open(mut self, open: bool) -> Self {
        self.drawer_open = open;
        self
    }

    pub fn session(&self) -> &User {
        &self.session
    }

    pub fn active_page(&self) -> &str {
        &self.active_page
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Activate `page_key` and close the drawer. Any key is accepted.
    pub fn navigate(&mut self, page_key: impl Into<String>) {
        let page_key = page_key.into();
        tracing::debug!(from = %self.active_page, to = %page_key, "page change");
        self.active_page = page_key;
        self.drawer_open = false;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn menu(&self) -> &'static [NavigationEntry] {
        menu_for(self.session.role)
    }

    pub fn view(&self) -> ViewVariant {
        select(self.session.role, &self.active_page)
    }

    pub fn page_title(&self) -> String {
        page_title(&self.active_page)
    }

    /// Drawer subtitle, e.g. "Teacher Portal".
    pub fn portal_label(&self) -> String {
        format!("{} Portal", self.session.role.display_name())
    }

    pub fn user_initial(&self) -> String {
        self.session.initial()
    }
}

use tracing::debug;

use crate::app::domain::Section;

/// Fixed navigation bar with a collapsible menu for narrow screens.
#[derive(Debug, Default)]
pub struct NavigationController {
    is_open: bool,
}

impl NavigationController {
    pub fn new() -> Self {
        Self { is_open: false }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn items(&self) -> &'static [Section] {
        &Section::ALL
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn close_menu(&mut self) {
        self.is_open = false;
    }

    /// Close the menu and return the anchor to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.close_menu();
        debug!(anchor = section.anchor(), "navigate");
        section.anchor()
    }
}

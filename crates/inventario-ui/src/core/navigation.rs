//! Navigation shell state: granted pages, active page, open/collapsed mode.
//!
//! # Design
//! - The host hands in an already role-filtered page list; the shell renders
//!   exactly that list and never widens it.
//! - Page requests outside the granted list are ignored, even though the
//!   rendered menu cannot produce them. Stale or forged state must not
//!   switch the active page.
//! - Viewport width is passed in by the caller so the state stays DOM-free.

use crate::core::breakpoints::is_narrow;
use crate::core::icons::{IconName, page_icon};
use inventario_api_models::Page;
use thiserror::Error;

/// Errors raised while seeding the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The host supplied no pages, so there is nothing to activate.
    #[error("no pages granted to the navigation shell")]
    NoGrantedPages,
}

/// Sidebar UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether the sidebar shows labels (open) or icons only (collapsed).
    pub is_open: bool,
    /// Currently highlighted page.
    pub active_page: Page,
}

/// One rendered menu row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Page this entry navigates to.
    pub page: Page,
    /// Icon drawn for the page.
    pub icon: IconName,
    /// Whether this entry is highlighted.
    pub active: bool,
    /// Whether the label is drawn next to the icon; collapsed mode shows it
    /// as a tooltip instead.
    pub show_label: bool,
}

/// Outcome of a page selection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Page switched; `collapsed` is set when the narrow layout auto-closed.
    Accepted {
        /// Whether the sidebar was closed as part of the selection.
        collapsed: bool,
    },
    /// Page is not granted; state unchanged.
    Ignored,
}

/// Navigation shell seeded with a user's granted pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationShell {
    pages: Vec<Page>,
    state: SidebarState,
}

impl NavigationShell {
    /// Seed the shell with the granted pages in menu order.
    ///
    /// Duplicates keep their first position. When `initial` is not granted
    /// the first page becomes active. The sidebar starts open.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoGrantedPages`] when `pages` is empty.
    pub fn new(pages: Vec<Page>, initial: Option<Page>) -> Result<Self, NavigationError> {
        let mut granted = Vec::with_capacity(pages.len());
        for page in pages {
            if !granted.contains(&page) {
                granted.push(page);
            }
        }
        let first = *granted.first().ok_or(NavigationError::NoGrantedPages)?;
        let active_page = initial.filter(|page| granted.contains(page)).unwrap_or(first);
        Ok(Self {
            pages: granted,
            state: SidebarState {
                is_open: true,
                active_page,
            },
        })
    }

    /// Granted pages in menu order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Current sidebar state.
    #[must_use]
    pub const fn state(&self) -> SidebarState {
        self.state
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Currently active page.
    #[must_use]
    pub const fn active_page(&self) -> Page {
        self.state.active_page
    }

    /// Whether `page` is part of the granted list.
    #[must_use]
    pub fn is_granted(&self, page: Page) -> bool {
        self.pages.contains(&page)
    }

    /// Switch to `page` if granted, closing the drawer on narrow viewports.
    pub fn set_active_page(&mut self, page: Page, viewport_width: u16) -> Selection {
        if !self.is_granted(page) {
            return Selection::Ignored;
        }
        self.state.active_page = page;
        let collapsed = self.state.is_open && is_narrow(viewport_width);
        if collapsed {
            self.state.is_open = false;
        }
        Selection::Accepted { collapsed }
    }

    /// Open or close the sidebar. The active page is untouched.
    pub const fn toggle_open(&mut self, is_open: bool) {
        self.state.is_open = is_open;
    }

    /// Menu rows for the granted pages, in order.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.pages
            .iter()
            .copied()
            .filter(|page| self.is_granted(*page))
            .map(|page| MenuEntry {
                page,
                icon: page_icon(page),
                active: page == self.state.active_page,
                show_label: self.state.is_open,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: u16 = 1440;
    const PHONE: u16 = 390;

    fn dashboard_and_settings() -> NavigationShell {
        NavigationShell::new(vec![Page::Dashboard, Page::Settings], Some(Page::Dashboard))
            .expect("granted pages")
    }

    #[test]
    fn empty_page_list_is_rejected() {
        assert_eq!(
            NavigationShell::new(Vec::new(), None),
            Err(NavigationError::NoGrantedPages)
        );
    }

    #[test]
    fn ungranted_initial_page_falls_back_to_first() {
        let shell = NavigationShell::new(vec![Page::Settings, Page::Dashboard], Some(Page::Audit))
            .expect("granted pages");
        assert_eq!(shell.active_page(), Page::Settings);
        assert!(shell.is_open());
    }

    #[test]
    fn duplicate_pages_keep_first_position() {
        let shell = NavigationShell::new(
            vec![Page::Dashboard, Page::Audit, Page::Dashboard],
            None,
        )
        .expect("granted pages");
        assert_eq!(shell.pages(), &[Page::Dashboard, Page::Audit]);
    }

    #[test]
    fn selecting_granted_then_ungranted_page() {
        let mut shell = dashboard_and_settings();

        assert_eq!(
            shell.set_active_page(Page::Settings, WIDE),
            Selection::Accepted { collapsed: false }
        );
        assert_eq!(shell.active_page(), Page::Settings);
        let highlighted: Vec<_> = shell
            .menu()
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.page)
            .collect();
        assert_eq!(highlighted, vec![Page::Settings]);

        let before = shell.clone();
        assert_eq!(shell.set_active_page(Page::Audit, WIDE), Selection::Ignored);
        assert_eq!(shell, before);
    }

    #[test]
    fn ungranted_page_is_ignored_from_initial_state() {
        let mut shell = dashboard_and_settings();
        let before = shell.state();
        for page in [Page::Audit, Page::UsersAndPermissions, Page::LicenseControl] {
            assert_eq!(shell.set_active_page(page, PHONE), Selection::Ignored);
            assert_eq!(shell.state(), before);
        }
    }

    #[test]
    fn narrow_viewport_closes_drawer_after_selection() {
        let mut shell = dashboard_and_settings();
        assert_eq!(
            shell.set_active_page(Page::Settings, PHONE),
            Selection::Accepted { collapsed: true }
        );
        assert!(!shell.is_open());
        assert_eq!(shell.active_page(), Page::Settings);
    }

    #[test]
    fn wide_viewport_keeps_sidebar_open() {
        let mut shell = dashboard_and_settings();
        shell.set_active_page(Page::Settings, 1024);
        assert!(shell.is_open());
    }

    #[test]
    fn selecting_while_collapsed_reports_no_collapse() {
        let mut shell = dashboard_and_settings();
        shell.toggle_open(false);
        assert_eq!(
            shell.set_active_page(Page::Settings, PHONE),
            Selection::Accepted { collapsed: false }
        );
        assert!(!shell.is_open());
    }

    #[test]
    fn toggling_preserves_active_page() {
        let mut shell = dashboard_and_settings();
        shell.set_active_page(Page::Settings, WIDE);

        shell.toggle_open(false);
        assert_eq!(shell.active_page(), Page::Settings);
        shell.toggle_open(true);
        assert_eq!(shell.active_page(), Page::Settings);
        assert!(shell.is_open());
    }

    #[test]
    fn collapsed_menu_hides_labels_but_keeps_highlight() {
        let mut shell = dashboard_and_settings();
        shell.toggle_open(false);
        let menu = shell.menu();
        assert!(menu.iter().all(|entry| !entry.show_label));
        assert_eq!(menu.iter().filter(|entry| entry.active).count(), 1);
        assert_eq!(menu[0].page, Page::Dashboard);
        assert!(menu[0].active);
    }

    #[test]
    fn menu_matches_granted_pages_exactly() {
        let granted = vec![Page::Audit, Page::Dashboard, Page::EquipmentInventory];
        let shell = NavigationShell::new(granted.clone(), None).expect("granted pages");
        let pages: Vec<_> = shell.menu().into_iter().map(|entry| entry.page).collect();
        assert_eq!(pages, granted);
        assert_eq!(shell.menu()[0].icon, IconName::History);
    }
}

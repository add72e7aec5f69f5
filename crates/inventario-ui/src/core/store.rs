//! App-wide yewdux store.
//!
//! # Design
//! - The store owns the post-login session; the login form never keeps the user.
//! - Navigation state lives next to the user it was seeded from, so signing
//!   out drops both together.

use crate::core::breakpoints::is_narrow;
use crate::core::navigation::{NavigationError, NavigationShell, Selection};
use inventario_api_models::{Page, User};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authenticated session; `None` renders the login screen.
    pub session: Option<SignedIn>,
}

/// Authenticated user plus the navigation shell seeded for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    /// User returned by the login call.
    pub user: User,
    /// Sidebar state for the user's granted pages.
    pub navigation: NavigationShell,
}

impl AppStore {
    /// Install a session for `user`, seeding navigation from their role.
    ///
    /// The sidebar starts collapsed on drawer layouts so it does not cover
    /// the first page.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError`] when the role grants no pages; the store
    /// stays signed out in that case.
    pub fn sign_in(&mut self, user: User, viewport_width: u16) -> Result<(), NavigationError> {
        let mut navigation =
            NavigationShell::new(user.role.granted_pages(), Some(Page::Dashboard))?;
        navigation.toggle_open(!is_narrow(viewport_width));
        self.session = Some(SignedIn { user, navigation });
        Ok(())
    }

    /// Drop the session and its navigation state.
    pub fn sign_out(&mut self) {
        self.session = None;
    }

    /// Forward a page request to the navigation shell.
    pub fn select_page(&mut self, page: Page, viewport_width: u16) -> Selection {
        self.session
            .as_mut()
            .map_or(Selection::Ignored, |session| {
                session.navigation.set_active_page(page, viewport_width)
            })
    }

    /// Open or close the sidebar when signed in.
    pub fn set_sidebar_open(&mut self, is_open: bool) {
        if let Some(session) = self.session.as_mut() {
            session.navigation.toggle_open(is_open);
        }
    }
}

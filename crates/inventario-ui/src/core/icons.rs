//! Icon identifiers and the page-to-icon table.
//!
//! # Design
//! - Icons are a closed enum; the SVG bodies live in the component layer.
//! - The page table is an exhaustive `match`, so adding a [`Page`] without an
//!   icon fails to compile instead of rendering a blank menu entry.

use inventario_api_models::Page;

/// Every glyph the shell can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Dashboard tiles.
    LayoutDashboard,
    /// Desktop computer.
    Computer,
    /// Scroll with text lines.
    ScrollText,
    /// Group of people.
    Users,
    /// Gear.
    Settings,
    /// Clock with counter-clockwise arrow.
    History,
    /// Shield with check mark, the default brand mark.
    ShieldCheck,
    /// Key with round bow, used for SSO.
    KeyRound,
    /// Single person.
    User,
    /// Close cross.
    X,
    /// Double chevron pointing right.
    ChevronsRight,
    /// Single chevron pointing left.
    ChevronLeft,
    /// Hamburger menu.
    Menu,
    /// Door with arrow.
    LogOut,
}

impl IconName {
    /// Every icon, for table checks.
    #[must_use]
    pub const fn all() -> [Self; 14] {
        [
            Self::LayoutDashboard,
            Self::Computer,
            Self::ScrollText,
            Self::Users,
            Self::Settings,
            Self::History,
            Self::ShieldCheck,
            Self::KeyRound,
            Self::User,
            Self::X,
            Self::ChevronsRight,
            Self::ChevronLeft,
            Self::Menu,
            Self::LogOut,
        ]
    }

    /// Kebab-case name matching the upstream icon set.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "layout-dashboard",
            Self::Computer => "computer",
            Self::ScrollText => "scroll-text",
            Self::Users => "users",
            Self::Settings => "settings",
            Self::History => "history",
            Self::ShieldCheck => "shield-check",
            Self::KeyRound => "key-round",
            Self::User => "user",
            Self::X => "x",
            Self::ChevronsRight => "chevrons-right",
            Self::ChevronLeft => "chevron-left",
            Self::Menu => "menu",
            Self::LogOut => "log-out",
        }
    }
}

/// Menu icon for a page.
#[must_use]
pub const fn page_icon(page: Page) -> IconName {
    match page {
        Page::Dashboard => IconName::LayoutDashboard,
        Page::EquipmentInventory => IconName::Computer,
        Page::LicenseControl => IconName::ScrollText,
        Page::UsersAndPermissions => IconName::Users,
        Page::Settings => IconName::Settings,
        Page::Audit => IconName::History,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_page_has_a_distinct_icon() {
        let icons: HashSet<_> = Page::all().into_iter().map(page_icon).collect();
        assert_eq!(icons.len(), Page::all().len());
    }

    #[test]
    fn page_icons_match_upstream_names() {
        assert_eq!(page_icon(Page::Dashboard).slug(), "layout-dashboard");
        assert_eq!(page_icon(Page::EquipmentInventory).slug(), "computer");
        assert_eq!(page_icon(Page::LicenseControl).slug(), "scroll-text");
        assert_eq!(page_icon(Page::UsersAndPermissions).slug(), "users");
        assert_eq!(page_icon(Page::Settings).slug(), "settings");
        assert_eq!(page_icon(Page::Audit).slug(), "history");
    }

    #[test]
    fn icon_slugs_are_unique() {
        let slugs: HashSet<_> = IconName::all().into_iter().map(IconName::slug).collect();
        assert_eq!(slugs.len(), IconName::all().len());
    }
}

//! Layout tiers for the navigation shell.
//!
//! Below [`DOCKED_MIN_WIDTH`] the sidebar is an overlay drawer that closes
//! after navigation; from there up it is docked next to the content.

/// First width (CSS pixels) with a docked sidebar.
pub const DOCKED_MIN_WIDTH: u16 = 1024;

/// First width (CSS pixels) of the tablet tier.
pub const TABLET_MIN_WIDTH: u16 = 768;

/// Layout tier derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    /// Phones: drawer sidebar, compact top bar.
    Phone,
    /// Tablets: drawer sidebar, full top bar.
    Tablet,
    /// Laptops and up: docked sidebar.
    Desktop,
}

impl Breakpoint {
    /// Tier for a viewport width.
    #[must_use]
    pub const fn for_width(width: u16) -> Self {
        if width >= DOCKED_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Phone
        }
    }

    /// Name mirrored into the `data-bp` body attribute and CSS classes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Whether the sidebar renders as an overlay drawer.
    #[must_use]
    pub const fn is_drawer(self) -> bool {
        !matches!(self, Self::Desktop)
    }
}

/// Whether the width falls in the overlay-drawer layout.
#[must_use]
pub const fn is_narrow(width: u16) -> bool {
    Breakpoint::for_width(width).is_drawer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_at_tablet_and_docked_widths() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Phone);
        assert_eq!(Breakpoint::for_width(767), Breakpoint::Phone);
        assert_eq!(Breakpoint::for_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1023), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(u16::MAX), Breakpoint::Desktop);
    }

    #[test]
    fn drawer_layout_ends_at_docked_width() {
        assert!(is_narrow(390));
        assert!(is_narrow(1023));
        assert!(!is_narrow(1024));
        assert_eq!(Breakpoint::Tablet.name(), "tablet");
    }
}

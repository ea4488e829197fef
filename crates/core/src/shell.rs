//! Page shell: sections, in-page navigation, and the mobile menu flag.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A section of the single page, addressable by its fragment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Shop,
    Lookbook,
    Reviews,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Shop,
        Self::Lookbook,
        Self::Reviews,
        Self::Contact,
    ];

    /// The element id rendered on the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Shop => "shop",
            Self::Lookbook => "lookbook",
            Self::Reviews => "reviews",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Shop => "Shop",
            Self::Lookbook => "Lookbook",
            Self::Reviews => "Reviews",
            Self::Contact => "Contact",
        }
    }

    /// In-page anchor href, e.g. `#shop`.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|section| section.id() == s).ok_or(())
    }
}

/// Resolve an anchor href to the in-page section it scrolls to.
///
/// Only fragment hrefs (`#id`) are intercepted; anything else, or a
/// fragment naming no section, resolves to `None` and is left alone.
#[must_use]
pub fn fragment_target(href: &str) -> Option<Section> {
    href.strip_prefix('#')?.parse().ok()
}

/// A link in the header and mobile navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub section: &'static str,
}

/// Navigation links in header order.
#[must_use]
pub fn nav_links() -> Vec<NavLink> {
    Section::ALL
        .into_iter()
        .map(|section| NavLink {
            href: section.href(),
            label: section.label(),
            section: section.id(),
        })
        .collect()
}

/// Per-visitor UI flags that are not part of the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    pub menu_open: bool,
}

impl UiFlags {
    /// Flip the mobile menu.
    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu, as following one of its links does.
    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

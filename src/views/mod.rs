//! Web interface components for the conference site
//!
//! This module contains the Dioxus components that make up the web interface,
//! including the navigation bar, the sponsor pages and the static pages the
//! menus link to.

/// Navigation bar layout
mod navbar;
pub use navbar::NavBar;

/// Mobile menu shown on narrow screens
mod navbar_mobile;
pub use navbar_mobile::NavBarMobile;

/// Desktop menu entries
mod desktop_menu;
pub use desktop_menu::{DesktopMenuLink, DesktopMenuSection};

/// Light/dark theme toggle
mod theme_switch;
pub use theme_switch::{Theme, ThemeSwitch};

/// Loading indicator
mod loader;
pub use loader::Loader;

/// Sponsor detail page
mod sponsor_detail;
pub use sponsor_detail::SponsorDetailPage;

/// Sponsor list page
mod sponsor_list;
pub use sponsor_list::SponsorList;

/// Home page component
mod home;
pub use home::Home;

/// Static pages and the account page
mod pages;
pub use pages::{About, CodeOfConduct, MyPage, PageNotFound, Schedule};

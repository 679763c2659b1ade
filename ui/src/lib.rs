//! Shared UI crate for CoachCal. The step-activity core and every
//! cross-platform view live here; platform crates only add routing.

pub mod activity;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::screen_link;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::Screen;
}

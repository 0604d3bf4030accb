//! Shared UI crate for the What-if analysis dashboard. Data shaping and every
//! view live here; the launchers only add routing and window setup.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

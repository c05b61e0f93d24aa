//! Routing surface: routes, route resolution, and navigation items.

pub mod item;
pub mod route;

pub use item::{NAV_ITEMS, NavItem};
pub use route::Route;

//! Dining Menu
//!
//! Dietary filtering for dining hall menus: a catalog of items tagged with dietary icons, a
//! filter state of whitelisted and blacklisted tags, and the grouped view of items that pass.

pub mod catalog;
pub mod client;
pub mod filters;
pub mod fixtures;
pub mod page;
pub mod payload;
pub mod prelude;
pub mod render;
pub mod session;
pub mod tags;

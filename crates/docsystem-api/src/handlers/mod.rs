//! Route handlers organized by page.

pub mod auth;
pub mod contacts;
pub mod documentation;
pub mod health;
pub mod home;
pub mod navigation;
pub mod objects;

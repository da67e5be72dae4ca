//! # UI Widgets
//!
//! Reusable components shared by the screens.

pub mod forms;
pub mod nav_bar;
pub mod price_display;
pub mod status_bar;
pub mod tables;

//! # User Interface
//!
//! egui rendering: theme, reusable widgets, and per-screen renderers.

pub mod screens;
pub mod theme;
pub mod widgets;

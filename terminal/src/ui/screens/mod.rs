//! # Screens
//!
//! One renderer per application screen. Each takes the egui `Ui` plus
//! the [`crate::app::App`] so button handlers can spawn work.

pub mod auth;
pub mod dashboard;
pub mod market;
pub mod trade;

//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod date_selector;
pub mod footer;
pub mod header;
pub mod logs;
pub mod recent;
pub mod spinner;
pub mod weekly;
pub mod wod_panel;
pub mod workouts_page;

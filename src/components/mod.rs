//! UI components.

pub mod action_bar;
pub mod drop_area;
pub mod palette;
pub mod placed_control;

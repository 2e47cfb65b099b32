//! UI module for the section checker
//!
//! # Panel Structure
//! - `header` - Application title
//! - `input_panel` - Left: geometry, reinforcement, materials, moment, Calculate
//! - `results_panel` - Right: report lines or the error of the last Calculate
//! - `status_bar` - Bottom status message

pub mod header;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

//! CLI library components for the class planner.

pub mod commands;
pub mod logging;
pub mod types;

//! Input adapters for the explorer.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;

// UI module for the Inkwell journal TUI
// This module handles all the terminal UI rendering logic

mod animations;
mod draw;
mod main_view;
mod tip_sheet;
mod toast;
mod utils;

// Re-export the public functions
pub use draw::draw;

//! TUI Utility Modules
//!
//! This module contains utility functions and helpers for the TUI implementation.

pub mod formatting;
pub mod logger;
pub mod responsive;

pub use formatting::*;
pub use logger::*;
pub use responsive::*;

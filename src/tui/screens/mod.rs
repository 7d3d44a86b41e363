//! Screen Implementations
//!
//! Pages rendered in the main area for each route.

pub mod pages;

pub use pages::*;

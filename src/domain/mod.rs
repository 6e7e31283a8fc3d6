//! Domain logic and core data structures
//!
//! This module contains pure geometry that is independent of Win32 APIs:
//! the `Rect` building block and the overlay layout calculator.

pub mod core;
pub mod layout;

pub use core::Rect;
pub use layout::{LayoutError, ScreenRegions};

//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the cached snapshot and
//! renders to a terminal frame. No widget mutates state or talks to the
//! runtime.

pub mod end_screen;
pub mod footer;
pub mod header;
pub mod inbox;
pub mod meters;
pub mod reading_pane;
pub mod start_screen;

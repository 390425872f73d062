//! Quickstart core crate.
//!
//! The first-party pieces of the quickstart program: finding the `resources`
//! directory next to (or above) the executable, integrating the bouncing
//! sprite, and pacing the frame loop. Windowing, rendering and audio belong to
//! the graphics library the program drives and are not part of this crate.

pub mod coords;
pub mod logging;
pub mod motion;
pub mod resource;
pub mod time;

pub use resource::locate_and_activate;

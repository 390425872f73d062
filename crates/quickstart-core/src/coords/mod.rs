//! Coordinate and geometry types used by the sprite simulation.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

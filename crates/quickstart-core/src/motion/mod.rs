//! Sprite motion.
//!
//! One sprite moving at constant speed, spinning, and reflecting off the
//! screen edges.

mod sprite;

pub use sprite::Sprite;

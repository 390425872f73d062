//! Time subsystem.
//!
//! - `FrameClock` measures the delta time fed into the sprite integration
//! - `FramePacer` holds the loop to a target frame rate
//!
//! Call `FrameClock::tick()` once per frame, then `FramePacer::wait()` at the
//! end of the frame.

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;

//! Platform abstraction layer
//!
//! Collaborators the game loop consumes:
//! - Monotonic time and frame deltas
//! - Held-key keyboard state

pub mod clock;
pub mod input;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, FixedStep, FrameTimer, MonotonicClock};
pub use input::{InputState, Key, KeyboardState, quit_requested, tick_input};

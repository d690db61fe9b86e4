//! Platform abstraction layer
//!
//! Handles the parts of the outside world the frame loop consumes:
//! - Input events and held-key state
//! - Time and fixed-rate frame pacing

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, ScriptedInput, ScriptedTick};
pub use time::{Clock, FramePacer, ManualClock, SystemClock};

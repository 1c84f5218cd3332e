//! Audio system
//!
//! Sound registration and per-sound state. Decoding and playback are left
//! to a backend; this module only tracks what has been registered and how
//! loud it should be.

pub mod sound_manager;

pub use sound_manager::{Sound, SoundHandle, SoundManager};

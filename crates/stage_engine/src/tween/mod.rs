//! Tween registration
//!
//! A tween describes a change of one or more properties of a world object
//! over time. The manager owns tween descriptions and their run state;
//! advancing them frame by frame belongs to an animation system.

mod tween_data;
mod tween_manager;

pub use tween_data::{Easing, Tween, TweenProperty, TweenState};
pub use tween_manager::{TweenError, TweenHandle, TweenManager};

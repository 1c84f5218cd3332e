//! Tween description

use crate::world::ObjectId;

/// Animatable object property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// Horizontal position
    X,
    /// Vertical position
    Y,
    /// Opacity
    Alpha,
    /// Rotation in radians
    Rotation,
    /// Horizontal scale
    ScaleX,
    /// Vertical scale
    ScaleY,
}

/// Easing curve tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate
    #[default]
    Linear,
    /// Quadratic ease in
    QuadIn,
    /// Quadratic ease out
    QuadOut,
    /// Quadratic ease in and out
    QuadInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
}

/// Run state of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// Created but not started
    #[default]
    Pending,
    /// Started
    Running,
    /// Paused after starting
    Paused,
    /// Stopped or finished
    Complete,
}

/// A tween on a world object
#[derive(Debug, Clone)]
pub struct Tween {
    target: ObjectId,
    properties: Vec<(TweenProperty, f32)>,
    /// Duration in milliseconds
    pub duration: f32,
    /// Delay before starting, in milliseconds
    pub delay: f32,
    /// Easing curve
    pub easing: Easing,
    /// Extra repetitions after the first run
    pub repeat: u32,
    /// Play backwards after each forward run
    pub yoyo: bool,
    state: TweenState,
}

impl Tween {
    /// Create an empty tween for a target object
    pub fn new(target: ObjectId) -> Self {
        Self {
            target,
            properties: Vec::new(),
            duration: 1000.0,
            delay: 0.0,
            easing: Easing::Linear,
            repeat: 0,
            yoyo: false,
            state: TweenState::Pending,
        }
    }

    /// Object the tween runs on
    pub fn target(&self) -> ObjectId {
        self.target
    }

    /// Set the end value of a property, replacing an earlier value for it
    pub fn to(mut self, property: TweenProperty, value: f32) -> Self {
        match self.properties.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((property, value)),
        }
        self
    }

    /// Set the duration in milliseconds
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the start delay in milliseconds
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set repetitions and yoyo
    pub fn with_repeat(mut self, repeat: u32, yoyo: bool) -> Self {
        self.repeat = repeat;
        self.yoyo = yoyo;
        self
    }

    /// Target values in the order they were first set
    pub fn properties(&self) -> &[(TweenProperty, f32)] {
        &self.properties
    }

    /// Current run state
    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Start (or restart) the tween
    pub fn start(&mut self) {
        self.state = TweenState::Running;
    }

    /// Pause a running tween
    pub fn pause(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Paused;
        }
    }

    /// Resume a paused tween
    pub fn resume(&mut self) {
        if self.state == TweenState::Paused {
            self.state = TweenState::Running;
        }
    }

    /// Stop the tween
    pub fn stop(&mut self) {
        self.state = TweenState::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn target() -> ObjectId {
        let mut ids: SlotMap<ObjectId, ()> = SlotMap::with_key();
        ids.insert(())
    }

    #[test]
    fn test_to_replaces_existing_property() {
        let tween = Tween::new(target())
            .to(TweenProperty::X, 10.0)
            .to(TweenProperty::Alpha, 0.0)
            .to(TweenProperty::X, 20.0);
        assert_eq!(tween.properties(), &[(TweenProperty::X, 20.0), (TweenProperty::Alpha, 0.0)]);
    }

    #[test]
    fn test_state_transitions() {
        let mut tween = Tween::new(target());
        assert_eq!(tween.state(), TweenState::Pending);

        tween.pause();
        assert_eq!(tween.state(), TweenState::Pending);

        tween.start();
        tween.pause();
        assert_eq!(tween.state(), TweenState::Paused);
        tween.resume();
        assert_eq!(tween.state(), TweenState::Running);
        tween.stop();
        assert_eq!(tween.state(), TweenState::Complete);
    }
}

//! Button - a sprite that swaps frames on pointer state and fires a callback

use std::fmt;

use super::{Frame, Sprite};

/// Pointer state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Pointer is elsewhere
    #[default]
    Out,
    /// Pointer is hovering over the button
    Over,
    /// Pointer is pressed on the button
    Down,
}

/// Click handler; receives the button that was clicked
pub type ButtonCallback = Box<dyn FnMut(&Button)>;

/// Interactive button
pub struct Button {
    /// Underlying sprite
    pub sprite: Sprite,
    /// Frame shown while hovered
    pub over_frame: Option<Frame>,
    /// Frame shown while the pointer is away
    pub out_frame: Option<Frame>,
    /// Frame shown while pressed
    pub down_frame: Option<Frame>,
    /// Whether the button reacts to input
    pub enabled: bool,
    state: ButtonState,
    callback: Option<ButtonCallback>,
}

impl Button {
    /// Create a button at a position; `key` of `None` leaves it untextured
    pub fn new(x: f32, y: f32, key: Option<&str>) -> Self {
        Self {
            sprite: Sprite::new(x, y, key.unwrap_or_default()),
            over_frame: None,
            out_frame: None,
            down_frame: None,
            enabled: true,
            state: ButtonState::Out,
            callback: None,
        }
    }

    /// Set the click callback
    pub fn with_callback(mut self, callback: impl FnMut(&Button) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Set an already-boxed click callback (or clear it)
    pub fn set_callback(&mut self, callback: Option<ButtonCallback>) {
        self.callback = callback;
    }

    /// Set the state frames
    ///
    /// The out frame, when given, is applied immediately since a new button
    /// starts in the out state.
    pub fn with_frames(
        mut self,
        over_frame: Option<Frame>,
        out_frame: Option<Frame>,
        down_frame: Option<Frame>,
    ) -> Self {
        self.over_frame = over_frame;
        self.out_frame = out_frame;
        self.down_frame = down_frame;
        self.apply_frame();
        self
    }

    /// Whether a click callback is set
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Current pointer state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Change state and swap to that state's frame if one is set
    pub fn set_state(&mut self, state: ButtonState) {
        if !self.enabled {
            return;
        }
        self.state = state;
        self.apply_frame();
    }

    fn apply_frame(&mut self) {
        let frame = match self.state {
            ButtonState::Out => &self.out_frame,
            ButtonState::Over => &self.over_frame,
            ButtonState::Down => &self.down_frame,
        };
        if let Some(frame) = frame {
            self.sprite.frame = Some(frame.clone());
        }
    }

    /// Pointer moved onto the button
    pub fn pointer_over(&mut self) {
        self.set_state(ButtonState::Over);
    }

    /// Pointer left the button
    pub fn pointer_out(&mut self) {
        self.set_state(ButtonState::Out);
    }

    /// Pointer pressed on the button
    pub fn pointer_down(&mut self) {
        self.set_state(ButtonState::Down);
    }

    /// Pointer released; a release after a press is a click
    ///
    /// Returns whether the click callback ran.
    pub fn pointer_up(&mut self) -> bool {
        if !self.enabled {
            return false;
        }

        let clicked = self.state == ButtonState::Down;
        self.set_state(ButtonState::Over);

        if !clicked {
            return false;
        }
        match self.callback.take() {
            Some(mut callback) => {
                callback(&*self);
                self.callback = Some(callback);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("sprite", &self.sprite)
            .field("over_frame", &self.over_frame)
            .field("out_frame", &self.out_frame)
            .field("down_frame", &self.down_frame)
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn framed() -> Button {
        Button::new(10.0, 20.0, Some("buttons")).with_frames(
            Some(Frame::Index(1)),
            Some(Frame::Index(0)),
            Some(Frame::Index(2)),
        )
    }

    #[test]
    fn test_state_frames() {
        let mut button = framed();
        assert_eq!(button.sprite.frame, Some(Frame::Index(0)));

        button.pointer_over();
        assert_eq!(button.sprite.frame, Some(Frame::Index(1)));
        button.pointer_down();
        assert_eq!(button.sprite.frame, Some(Frame::Index(2)));
        button.pointer_out();
        assert_eq!(button.sprite.frame, Some(Frame::Index(0)));
    }

    #[test]
    fn test_missing_frame_keeps_current() {
        let mut button = Button::new(0.0, 0.0, Some("b")).with_frames(None, Some(Frame::Index(4)), None);
        button.pointer_down();
        assert_eq!(button.state(), ButtonState::Down);
        assert_eq!(button.sprite.frame, Some(Frame::Index(4)));
    }

    #[test]
    fn test_click_fires_callback() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut button = framed().with_callback(move |b| {
            assert_eq!(b.sprite.key, "buttons");
            counter.set(counter.get() + 1);
        });

        assert!(!button.pointer_up());
        button.pointer_down();
        assert!(button.pointer_up());
        assert_eq!(clicks.get(), 1);
        assert_eq!(button.state(), ButtonState::Over);
        assert!(button.has_callback());

        button.pointer_down();
        assert!(button.pointer_up());
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_disabled_button_ignores_input() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut button = framed().with_callback(move |_| counter.set(counter.get() + 1));
        button.enabled = false;

        button.pointer_down();
        assert_eq!(button.state(), ButtonState::Out);
        assert!(!button.pointer_up());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_untextured_button() {
        let button = Button::new(0.0, 0.0, None);
        assert!(!button.sprite.has_texture());
        assert!(!button.has_callback());
    }
}

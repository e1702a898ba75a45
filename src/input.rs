//! Keyboard/touch intent buffer
//!
//! Host event callbacks write into [`InputState`] between frames; the game
//! loop reads it exactly once per tick. Everything runs on one logical
//! thread, so there is no locking: whatever events arrived before this
//! tick's read are visible to it.

/// Abstract input channels the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    PauseToggle,
    Start,
}

/// Latest input intent, written asynchronously and consumed per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    pause_toggle: bool,
    start: bool,
    /// Lateral drag accumulated from pointer/touch moves since last consume
    drag_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down or up
    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::PauseToggle => self.pause_toggle = pressed,
            Key::Start => self.start = pressed,
        }
    }

    /// Current level of a key
    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::PauseToggle => self.pause_toggle,
            Key::Start => self.start,
        }
    }

    /// Accumulate pointer/touch drag movement (screen-space lateral delta)
    pub fn add_drag(&mut self, delta: f32) {
        self.drag_delta += delta;
    }

    /// Take the accumulated drag delta, resetting it to zero so the same
    /// movement is never applied twice
    pub fn consume_lateral_drag(&mut self) -> f32 {
        std::mem::take(&mut self.drag_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(Key::Left));

        input.set_pressed(Key::Left, true);
        assert!(input.is_pressed(Key::Left));
        assert!(!input.is_pressed(Key::Right));

        input.set_pressed(Key::Left, false);
        assert!(!input.is_pressed(Key::Left));
    }

    #[test]
    fn test_drag_accumulates_until_consumed() {
        let mut input = InputState::new();
        input.add_drag(3.0);
        input.add_drag(-1.0);
        assert_eq!(input.consume_lateral_drag(), 2.0);

        // Second consume without new events must see nothing
        assert_eq!(input.consume_lateral_drag(), 0.0);
    }
}

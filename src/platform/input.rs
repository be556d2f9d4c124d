//! Keyboard state
//!
//! Level-triggered only: the game reads which keys are held at the start
//! of each frame and turns that into a `TickInput`.

use std::collections::HashSet;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Thrust,
    Quit,
}

/// Anything that can report held keys
pub trait KeyboardState {
    /// Refresh state before a frame is read (pump events, run scripts, ...)
    fn poll(&mut self) {}

    fn is_held(&self, key: Key) -> bool;

    /// Window close or similar out-of-band request
    fn close_requested(&self) -> bool {
        false
    }
}

/// Held-key set fed by key down/up events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl KeyboardState for InputState {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Controls held this frame
pub fn tick_input(keys: &impl KeyboardState) -> TickInput {
    TickInput {
        left: keys.is_held(Key::Left),
        right: keys.is_held(Key::Right),
        thrust: keys.is_held(Key::Thrust),
    }
}

/// Quit key held or the window asked to close
pub fn quit_requested(keys: &impl KeyboardState) -> bool {
    keys.is_held(Key::Quit) || keys.close_requested()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_tick_input() {
        let mut input = InputState::new();
        assert_eq!(tick_input(&input), TickInput::default());

        input.key_down(Key::Left);
        input.key_down(Key::Thrust);
        assert_eq!(
            tick_input(&input),
            TickInput { left: true, right: false, thrust: true }
        );

        input.key_up(Key::Left);
        input.key_down(Key::Right);
        assert_eq!(
            tick_input(&input),
            TickInput { left: false, right: true, thrust: true }
        );

        input.clear();
        assert_eq!(tick_input(&input), TickInput::default());
    }

    #[test]
    fn test_quit_sources() {
        let mut input = InputState::new();
        assert!(!quit_requested(&input));

        input.key_down(Key::Quit);
        assert!(quit_requested(&input));

        let mut input = InputState::new();
        input.request_close();
        assert!(quit_requested(&input));
    }
}

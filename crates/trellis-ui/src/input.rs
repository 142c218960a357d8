//! Polled input facade

use crate::event::{EventKind, Key, MouseButton};
use smallvec::SmallVec;
use trellis_ui_graphics::Point;

/// Pointer and button state sampled once per frame by the dispatcher.
pub trait InputState {
    fn pointer_position(&self) -> Point;
    fn is_button_pressed(&self, button: MouseButton) -> bool;
    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseButtons(u8);

impl MouseButtons {
    pub const NONE: Self = Self(0);

    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: MouseButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

/// [`InputState`] fed from the same events the host forwards to the UI.
#[derive(Clone, Debug, Default)]
pub struct PolledInput {
    pointer: Point,
    buttons: MouseButtons,
    keys: SmallVec<[Key; 4]>,
}

impl PolledInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &EventKind) {
        match *event {
            EventKind::MouseMoved { position } => self.pointer = position,
            EventKind::MouseButtonPressed { button } => self.buttons.insert(button),
            EventKind::MouseButtonReleased { button } => self.buttons.remove(button),
            EventKind::KeyPressed { key, .. } => {
                if !self.keys.contains(&key) {
                    self.keys.push(key);
                }
            }
            EventKind::KeyReleased { key, .. } => self.keys.retain(|held| *held != key),
            EventKind::WindowResized { .. } | EventKind::MouseScrolled { .. } => {}
        }
    }

    pub fn set_pointer_position(&mut self, position: Point) {
        self.pointer = position;
    }
}

impl InputState for PolledInput {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(button)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_buttons_keys_and_pointer() {
        let mut input = PolledInput::new();
        input.apply(&EventKind::MouseMoved {
            position: Point::new(4.0, 9.0),
        });
        input.apply(&EventKind::MouseButtonPressed {
            button: MouseButton::Left,
        });
        input.apply(&EventKind::KeyPressed {
            key: Key::Shift,
            modifiers: Default::default(),
        });
        assert_eq!(input.pointer_position(), Point::new(4.0, 9.0));
        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Right));
        assert!(input.is_key_pressed(Key::Shift));

        input.apply(&EventKind::MouseButtonReleased {
            button: MouseButton::Left,
        });
        input.apply(&EventKind::KeyReleased {
            key: Key::Shift,
            modifiers: Default::default(),
        });
        assert!(!input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_key_pressed(Key::Shift));
    }
}

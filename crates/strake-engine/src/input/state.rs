use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds "is down" information; apps query it once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Conservative behavior: on focus loss, clear the "down" set.
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(key);
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
        }
    }

    // ── key tracking ──────────────────────────────────────────────────────

    #[test]
    fn press_marks_key_down() {
        let mut s = InputState::default();
        s.apply_event(press(Key::Escape));
        assert!(s.key_down(Key::Escape));
    }

    #[test]
    fn release_clears_key() {
        let mut s = InputState::default();
        s.apply_event(press(Key::Escape));
        s.apply_event(release(Key::Escape));
        assert!(!s.key_down(Key::Escape));
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut s = InputState::default();
        s.apply_event(press(Key::Space));
        s.apply_event(press(Key::Space));
        assert!(s.key_down(Key::Space));
        s.apply_event(release(Key::Space));
        assert!(!s.key_down(Key::Space));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_clears_down_set() {
        let mut s = InputState::default();
        s.apply_event(InputEvent::Focused(true));
        s.apply_event(press(Key::Escape));
        s.apply_event(InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(!s.key_down(Key::Escape));
    }
}

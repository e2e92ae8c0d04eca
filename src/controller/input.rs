use std::collections::HashSet;

use glam::Vec3;
use winit::keyboard::KeyCode;

/// Movement bindings, polled every tick: W/S along Z, A/D along X, Q/E
/// along Y. Each binding contributes one axis unit vector while held.
pub const MOVE_BINDINGS: [(KeyCode, Vec3); 6] = [
    (KeyCode::KeyW, Vec3::NEG_Z),
    (KeyCode::KeyS, Vec3::Z),
    (KeyCode::KeyA, Vec3::NEG_X),
    (KeyCode::KeyD, Vec3::X),
    (KeyCode::KeyQ, Vec3::NEG_Y),
    (KeyCode::KeyE, Vec3::Y),
];

/// Instantaneous keyboard state, fed from winit key events.
pub struct InputState {
    pressed_keys: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, code: KeyCode) {
        self.pressed_keys.insert(code);
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.pressed_keys.remove(&code);
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed_keys.contains(&code)
    }

    /// Drop all held keys, e.g. when the window loses focus. Otherwise a key
    /// released outside the window would be stuck down forever.
    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

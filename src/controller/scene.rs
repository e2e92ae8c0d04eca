use glam::Vec3;

use super::input::{InputState, MOVE_BINDINGS};

/// Movement speed in world units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Owns the movable object's pose and the motion-stop edge detector.
///
/// Every tick integrates the held movement keys into the position. Held keys
/// compose additively, so diagonal movement is faster than single-axis
/// movement; that matches the observed behavior and is deliberate.
pub struct SceneController {
    position: Vec3,
    last_position: Vec3,
    moving: bool,
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            last_position: Vec3::ZERO,
            moving: false,
        }
    }

    /// Current world translation of the mesh.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Advance one tick. Returns the resting position on the first idle tick
    /// after a continuous movement gesture, exactly once per gesture; the
    /// caller decides how to report it.
    pub fn update(&mut self, dt: f32, input: &InputState) -> Option<Vec3> {
        let previous = self.position;

        for (key, axis) in MOVE_BINDINGS {
            if input.is_pressed(key) {
                self.position += axis * MOVE_SPEED * dt;
            }
        }

        if self.position != previous {
            self.moving = true;
            self.last_position = self.position;
            None
        } else if self.moving {
            self.moving = false;
            Some(self.last_position)
        } else {
            None
        }
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    const EPS: f32 = 1e-4;

    fn held(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for &k in keys {
            input.key_down(k);
        }
        input
    }

    #[test]
    fn idle_scene_never_moves_or_reports() {
        let mut scene = SceneController::new();
        let input = InputState::new();
        for _ in 0..100 {
            assert_eq!(scene.update(0.016, &input), None);
        }
        assert_eq!(scene.position(), Vec3::ZERO);
    }

    #[test]
    fn holding_w_for_one_second_moves_five_units_forward() {
        let mut scene = SceneController::new();
        let input = held(&[KeyCode::KeyW]);
        for _ in 0..100 {
            scene.update(0.01, &input);
        }
        let pos = scene.position();
        assert!(pos.x.abs() < EPS && pos.y.abs() < EPS);
        assert!((pos.z + 5.0).abs() < EPS, "got {pos}");
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let mut scene = SceneController::new();
        let input = held(&[KeyCode::KeyW, KeyCode::KeyD]);
        for _ in 0..100 {
            scene.update(0.01, &input);
        }
        let pos = scene.position();
        assert!((pos.x - 5.0).abs() < EPS, "got {pos}");
        assert!((pos.z + 5.0).abs() < EPS, "got {pos}");
        // Magnitude exceeds the single-axis speed
        assert!(pos.length() > 5.0);
    }

    #[test]
    fn opposite_keys_cancel_exactly() {
        let mut scene = SceneController::new();
        let input = held(&[KeyCode::KeyQ, KeyCode::KeyE]);
        for _ in 0..50 {
            scene.update(0.02, &input);
        }
        assert_eq!(scene.position(), Vec3::ZERO);
    }

    #[test]
    fn displacement_is_additive_across_uneven_ticks() {
        let mut scene = SceneController::new();
        let input = held(&[KeyCode::KeyS]);
        let ticks = [0.013, 0.2, 0.0007, 0.1, 0.05];
        for dt in ticks {
            scene.update(dt, &input);
        }
        let expected: f32 = ticks.iter().sum::<f32>() * MOVE_SPEED;
        assert!((scene.position().z - expected).abs() < EPS);
    }

    #[test]
    fn reports_once_on_first_idle_tick_after_motion() {
        let mut scene = SceneController::new();
        let moving = held(&[KeyCode::KeyW]);
        let idle = InputState::new();

        for _ in 0..100 {
            assert_eq!(scene.update(0.01, &moving), None);
        }
        let stop = scene.update(0.01, &idle);
        let reported = stop.expect("first idle tick reports the resting position");
        assert!((reported.z + 5.0).abs() < EPS);
        assert_eq!(reported, scene.position());

        // Subsequent idle ticks stay quiet
        for _ in 0..100 {
            assert_eq!(scene.update(0.01, &idle), None);
        }
    }

    #[test]
    fn each_gesture_reports_separately() {
        let mut scene = SceneController::new();
        let moving = held(&[KeyCode::KeyD]);
        let idle = InputState::new();

        scene.update(0.1, &moving);
        let first = scene.update(0.1, &idle);
        assert!(first.is_some());

        scene.update(0.1, &moving);
        let second = scene.update(0.1, &idle);
        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn zero_dt_tick_does_not_count_as_motion() {
        let mut scene = SceneController::new();
        let moving = held(&[KeyCode::KeyW]);

        scene.update(0.1, &moving);
        // Key still held, but a zero-length tick leaves the position
        // unchanged, which ends the gesture
        let stop = scene.update(0.0, &moving);
        assert!(stop.is_some());
    }
}

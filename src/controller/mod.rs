// CONTROLLER: input state and the per-tick update loop
pub mod input;
pub mod scene;

pub use input::InputState;
pub use scene::{SceneController, MOVE_SPEED};

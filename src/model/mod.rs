// MODEL: mesh data and camera
pub mod camera;
pub mod mesh;

pub use camera::Camera;
pub use mesh::{Mesh, MeshBuffer, Vertex};

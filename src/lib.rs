pub mod camera;
pub mod cli;
pub mod core;
pub mod renderer;
pub mod scenes;
pub mod sim;
pub mod traits;
pub mod types;

// Re-export the pieces the binary and tests reach for most often
pub use camera::{PanState, TrackballCamera};
pub use scenes::create_diorama_scene;
pub use sim::FireworkSimulation;

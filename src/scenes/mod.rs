mod diorama;

pub use diorama::create_diorama_scene;

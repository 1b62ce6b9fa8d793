// src/engine_lib/mod.rs
pub mod scene_types;
pub mod scene_logic;
pub mod camera;
pub mod controller;

pub use scene_types::{RenderMode, Scene, SceneObject, Shape, TechniqueToggles};
pub use camera::Camera;
pub use controller::{DemoController, InputResponse};

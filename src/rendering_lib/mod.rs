// src/rendering_lib/mod.rs

pub mod renderer;
pub mod shader;
pub mod vertex;
pub mod mesh;

pub use renderer::{Renderer, DEPTH_FORMAT};
pub use vertex::Vertex;
pub use mesh::Mesh;
pub use shader::WGSL_SHADER_SOURCE;

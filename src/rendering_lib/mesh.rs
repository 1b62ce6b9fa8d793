// src/rendering_lib/mesh.rs
//
// CPU-side tessellation of the demo's solid primitives. All generators
// produce outward normals and counter-clockwise winding seen from
// outside, which is what the back-face-culling pipeline relies on.

use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;
use crate::engine_lib::scene_types::Shape;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// The primitive dimensions and tessellation the demo uses, one mesh per
/// `Shape` variant.
pub fn for_shape(shape: Shape) -> Mesh {
    match shape {
        Shape::Cube => cube(0.5),
        Shape::Sphere => uv_sphere(0.3, 20, 20),
        Shape::Torus => torus(0.1, 0.25, 20, 20),
        Shape::Cone => cone(0.3, 0.5, 20),
    }
}

/// Axis-aligned cube with edge length `size`, centered at the origin.
/// 24 vertices so each face gets its own flat normal.
pub fn cube(size: f32) -> Mesh {
    let h = size / 2.0;
    // normal, then four corners counter-clockwise seen from outside
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [1.0, 0.0, 0.0],
            [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
        ),
        (
            [0.0, 0.0, 1.0],
            [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
        ),
    ];

    let mut mesh = Mesh::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u16;
        for corner in corners {
            mesh.vertices.push(Vertex::new(corner, normal));
        }
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    }
    mesh
}

/// Latitude/longitude sphere centered at the origin, poles on the Y axis.
pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Mesh {
    let mut mesh = Mesh::default();

    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let normal = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            let position = [normal[0] * radius, normal[1] * radius, normal[2] * radius];
            mesh.vertices.push(Vertex::new(position, normal));
        }
    }

    let ring = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = (i * ring + j) as u16;
            let k2 = k1 + ring as u16;
            // the pole rings collapse to a point, skip their zero-area half
            if i != 0 {
                mesh.push_triangle(k1, k1 + 1, k2);
            }
            if i != stacks - 1 {
                mesh.push_triangle(k1 + 1, k2 + 1, k2);
            }
        }
    }
    mesh
}

/// Torus around the Z axis (hole facing the viewer): `ring_radius` from
/// the origin to the tube center, `tube_radius` around the tube.
pub fn torus(tube_radius: f32, ring_radius: f32, sides: u32, rings: u32) -> Mesh {
    let mut mesh = Mesh::default();

    for i in 0..=rings {
        let u = TAU * i as f32 / rings as f32;
        let (sin_u, cos_u) = u.sin_cos();
        for j in 0..=sides {
            let v = TAU * j as f32 / sides as f32;
            let (sin_v, cos_v) = v.sin_cos();
            let position = [
                (ring_radius + tube_radius * cos_v) * cos_u,
                (ring_radius + tube_radius * cos_v) * sin_u,
                tube_radius * sin_v,
            ];
            let normal = [cos_v * cos_u, cos_v * sin_u, sin_v];
            mesh.vertices.push(Vertex::new(position, normal));
        }
    }

    let ring = sides + 1;
    for i in 0..rings {
        for j in 0..sides {
            let k1 = (i * ring + j) as u16;
            let k2 = k1 + ring as u16;
            mesh.push_triangle(k1, k2, k1 + 1);
            mesh.push_triangle(k1 + 1, k2, k2 + 1);
        }
    }
    mesh
}

/// Cone along +Z, centered on its axis: base disk at z = -height/2, apex
/// at z = +height/2.
pub fn cone(radius: f32, height: f32, slices: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let half = height / 2.0;
    let slant = (height * height + radius * radius).sqrt();

    // lateral surface: base ring then one apex vertex per slice so the
    // slant normal varies around the cone
    for j in 0..=slices {
        let theta = TAU * j as f32 / slices as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let normal = [
            height * cos_theta / slant,
            height * sin_theta / slant,
            radius / slant,
        ];
        mesh.vertices
            .push(Vertex::new([radius * cos_theta, radius * sin_theta, -half], normal));
    }
    for j in 0..=slices {
        let theta = TAU * j as f32 / slices as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let normal = [
            height * cos_theta / slant,
            height * sin_theta / slant,
            radius / slant,
        ];
        mesh.vertices.push(Vertex::new([0.0, 0.0, half], normal));
    }
    let apex_base = (slices + 1) as u16;
    for j in 0..slices {
        let j = j as u16;
        mesh.push_triangle(j, j + 1, apex_base + j);
    }

    // base disk, facing -Z
    let center = mesh.vertices.len() as u16;
    mesh.vertices
        .push(Vertex::new([0.0, 0.0, -half], [0.0, 0.0, -1.0]));
    let rim_base = mesh.vertices.len() as u16;
    for j in 0..=slices {
        let theta = TAU * j as f32 / slices as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.vertices.push(Vertex::new(
            [radius * cos_theta, radius * sin_theta, -half],
            [0.0, 0.0, -1.0],
        ));
    }
    for j in 0..slices {
        let j = j as u16;
        mesh.push_triangle(center, rim_base + j + 1, rim_base + j);
    }

    mesh
}

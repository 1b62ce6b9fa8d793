// src/demo_scene.rs

use glam::Vec3;

use crate::engine_lib::scene_types::{Scene, SceneObject, Shape};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// The fixed four-object scene: one primitive per shape, laid out along a
/// diagonal so the cube is farthest from the camera and the cone nearest.
/// The `depth` values record each object's approximate view depth at
/// startup.
pub fn create_demo_scene() -> Scene {
    Scene::new(vec![
        SceneObject {
            id: 1,
            depth: -2.0,
            shape: Shape::Cube,
            color: RED,
            position: Vec3::new(-1.5, 0.0, -2.0),
        },
        SceneObject {
            id: 2,
            depth: -1.0,
            shape: Shape::Sphere,
            color: GREEN,
            position: Vec3::new(-0.5, 0.0, -1.0),
        },
        SceneObject {
            id: 3,
            depth: 0.0,
            shape: Shape::Torus,
            color: BLUE,
            position: Vec3::new(0.5, 0.0, 0.0),
        },
        SceneObject {
            id: 4,
            depth: 1.0,
            shape: Shape::Cone,
            color: YELLOW,
            position: Vec3::new(1.5, 0.0, 1.0),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_lib::scene_types::RenderMode;

    #[test]
    fn test_scene_has_exactly_four_objects() {
        let scene = create_demo_scene();
        assert_eq!(scene.objects.len(), 4);
        assert_eq!(
            scene.objects.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_scene_starts_unrotated_with_no_technique() {
        let scene = create_demo_scene();
        assert_eq!(scene.mode, RenderMode::None);
        assert_eq!(scene.rotation_deg, 0.0);
    }

    #[test]
    fn test_objects_are_laid_out_back_to_front() {
        let scene = create_demo_scene();
        for pair in scene.objects.windows(2) {
            assert!(pair[0].position.z < pair[1].position.z);
        }
    }

    #[test]
    fn test_each_shape_appears_once() {
        let scene = create_demo_scene();
        let shapes: Vec<Shape> = scene.objects.iter().map(|o| o.shape).collect();
        assert_eq!(
            shapes,
            vec![Shape::Cube, Shape::Sphere, Shape::Torus, Shape::Cone]
        );
    }
}

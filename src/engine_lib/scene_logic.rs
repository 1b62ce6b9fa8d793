// src/engine_lib/scene_logic.rs

use crate::engine_lib::scene_types::{RenderMode, Scene};

/// Puts the object list into the order the active mode draws in.
///
/// PainterAlgorithm sorts ascending by z so farther objects are drawn
/// first. The sort is stable (equal z keeps the existing relative order)
/// and mutates the shared list: every other mode draws the list as-is,
/// which means a prior painter sort stays in effect after switching away.
pub fn prepare_draw_order(scene: &mut Scene) {
    if scene.mode == RenderMode::PainterAlgorithm {
        scene
            .objects
            .sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_lib::scene_types::{ObjectId, SceneObject, Shape};
    use glam::Vec3;

    fn object(id: ObjectId, z: f32) -> SceneObject {
        SceneObject {
            id,
            depth: z,
            shape: Shape::Cube,
            color: [1.0, 1.0, 1.0, 1.0],
            position: Vec3::new(0.0, 0.0, z),
        }
    }

    fn ids(scene: &Scene) -> Vec<ObjectId> {
        scene.objects.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_painter_keeps_already_sorted_order() {
        let mut scene = Scene::new(vec![
            object(1, -2.0),
            object(2, -1.0),
            object(3, 0.0),
            object(4, 1.0),
        ]);
        scene.mode = RenderMode::PainterAlgorithm;
        prepare_draw_order(&mut scene);
        assert_eq!(ids(&scene), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_painter_sorts_reversed_depths() {
        let mut scene = Scene::new(vec![
            object(1, 1.0),
            object(2, 0.0),
            object(3, -1.0),
            object(4, -2.0),
        ]);
        scene.mode = RenderMode::PainterAlgorithm;
        prepare_draw_order(&mut scene);
        assert_eq!(ids(&scene), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_painter_sort_is_stable_on_ties() {
        let mut scene = Scene::new(vec![
            object(1, 0.5),
            object(2, -1.0),
            object(3, 0.5),
            object(4, 0.5),
        ]);
        scene.mode = RenderMode::PainterAlgorithm;
        prepare_draw_order(&mut scene);
        assert_eq!(ids(&scene), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_other_modes_never_reorder() {
        for mode in [
            RenderMode::None,
            RenderMode::BackFaceCulling,
            RenderMode::ZBuffer,
        ] {
            let mut scene = Scene::new(vec![
                object(1, 1.0),
                object(2, 0.0),
                object(3, -1.0),
                object(4, -2.0),
            ]);
            scene.mode = mode;
            prepare_draw_order(&mut scene);
            assert_eq!(ids(&scene), vec![1, 2, 3, 4], "mode {:?} reordered", mode);
        }
    }

    #[test]
    fn test_sorted_order_persists_after_leaving_painter_mode() {
        let mut scene = Scene::new(vec![
            object(1, 1.0),
            object(2, 0.0),
            object(3, -1.0),
            object(4, -2.0),
        ]);
        scene.mode = RenderMode::PainterAlgorithm;
        prepare_draw_order(&mut scene);
        assert_eq!(ids(&scene), vec![4, 3, 2, 1]);

        // Switching away does not restore insertion order.
        scene.set_mode(RenderMode::None);
        prepare_draw_order(&mut scene);
        assert_eq!(ids(&scene), vec![4, 3, 2, 1]);
    }
}

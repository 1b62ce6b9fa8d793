// src/engine_lib/scene_types.rs

use glam::Vec3;

pub type ObjectId = u32;

/// The closed set of drawable primitives. The renderer keeps one prebuilt
/// GPU mesh per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Sphere,
    Torus,
    Cone,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    /// Approximate view depth at startup. The painter sort keys on the
    /// object's actual z position, not this field.
    pub depth: f32,
    pub shape: Shape,
    pub color: [f32; 4],
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    None,
    BackFaceCulling,
    ZBuffer,
    PainterAlgorithm,
}

/// Which rasterizer toggles a mode needs. At most one of the two is set;
/// None and PainterAlgorithm use neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechniqueToggles {
    pub cull_back_faces: bool,
    pub depth_test: bool,
}

impl RenderMode {
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::None => "None (0)",
            RenderMode::BackFaceCulling => "Back-Face Culling (1)",
            RenderMode::ZBuffer => "Z-Buffer (2)",
            RenderMode::PainterAlgorithm => "Painter's Algorithm (3)",
        }
    }

    pub fn toggles(self) -> TechniqueToggles {
        match self {
            RenderMode::BackFaceCulling => TechniqueToggles {
                cull_back_faces: true,
                depth_test: false,
            },
            RenderMode::ZBuffer => TechniqueToggles {
                cull_back_faces: false,
                depth_test: true,
            },
            RenderMode::None | RenderMode::PainterAlgorithm => TechniqueToggles {
                cull_back_faces: false,
                depth_test: false,
            },
        }
    }
}

pub const ROTATION_STEP_DEG: f32 = 5.0;

/// Application state: the object list, the active technique and the scene
/// rotation. Mutated only by the input controller and the painter sort.
#[derive(Debug)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub mode: RenderMode,
    pub rotation_deg: f32,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            mode: RenderMode::default(),
            rotation_deg: 0.0,
        }
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            log::info!("render mode switched to {}", mode.label());
        }
        self.mode = mode;
    }

    /// Adjusts the rotation by `delta_deg`, wrapping into [0, 360).
    pub fn rotate_by(&mut self, delta_deg: f32) {
        self.rotation_deg = (self.rotation_deg + delta_deg).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_technique_per_mode() {
        let modes = [
            RenderMode::None,
            RenderMode::BackFaceCulling,
            RenderMode::ZBuffer,
            RenderMode::PainterAlgorithm,
        ];
        for mode in modes {
            let t = mode.toggles();
            assert!(
                !(t.cull_back_faces && t.depth_test),
                "{:?} enables both techniques",
                mode
            );
        }
        assert_eq!(
            RenderMode::BackFaceCulling.toggles(),
            TechniqueToggles { cull_back_faces: true, depth_test: false }
        );
        assert_eq!(
            RenderMode::ZBuffer.toggles(),
            TechniqueToggles { cull_back_faces: false, depth_test: true }
        );
        assert_eq!(
            RenderMode::None.toggles(),
            TechniqueToggles { cull_back_faces: false, depth_test: false }
        );
        assert_eq!(
            RenderMode::PainterAlgorithm.toggles(),
            TechniqueToggles { cull_back_faces: false, depth_test: false }
        );
    }

    #[test]
    fn test_rotation_wraps_upward() {
        let mut scene = Scene::new(Vec::new());
        scene.rotation_deg = 358.0;
        scene.rotate_by(ROTATION_STEP_DEG);
        assert_eq!(scene.rotation_deg, 3.0);
        scene.rotate_by(ROTATION_STEP_DEG);
        assert_eq!(scene.rotation_deg, 8.0);
    }

    #[test]
    fn test_rotation_wraps_downward() {
        let mut scene = Scene::new(Vec::new());
        scene.rotation_deg = 2.0;
        scene.rotate_by(-ROTATION_STEP_DEG);
        assert_eq!(scene.rotation_deg, 357.0);
    }

    #[test]
    fn test_rotation_stays_in_range() {
        let mut scene = Scene::new(Vec::new());
        for _ in 0..200 {
            scene.rotate_by(ROTATION_STEP_DEG);
            assert!(scene.rotation_deg >= 0.0 && scene.rotation_deg < 360.0);
        }
        for _ in 0..200 {
            scene.rotate_by(-ROTATION_STEP_DEG);
            assert!(scene.rotation_deg >= 0.0 && scene.rotation_deg < 360.0);
        }
    }
}

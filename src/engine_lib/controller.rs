// src/engine_lib/controller.rs

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::engine_lib::scene_types::{RenderMode, Scene, ROTATION_STEP_DEG};

/// What the event loop should do after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResponse {
    /// Not ours; let the caller handle it.
    Ignored,
    /// State changed; a redraw should be requested.
    Redraw,
    /// ESC: terminate the event loop. No redraw follows.
    Exit,
}

/// Maps the demo's keyboard surface onto scene state:
/// digits 0..3 pick the technique, arrows spin the scene, ESC quits.
pub struct DemoController;

impl DemoController {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, scene: &mut Scene) -> InputResponse {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. }
                if key_event.state == ElementState::Pressed =>
            {
                match key_event.physical_key {
                    PhysicalKey::Code(code) => self.handle_key(code, scene),
                    PhysicalKey::Unidentified(_) => InputResponse::Ignored,
                }
            }
            _ => InputResponse::Ignored,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, scene: &mut Scene) -> InputResponse {
        match code {
            KeyCode::Digit0 => {
                scene.set_mode(RenderMode::None);
                InputResponse::Redraw
            }
            KeyCode::Digit1 => {
                scene.set_mode(RenderMode::BackFaceCulling);
                InputResponse::Redraw
            }
            KeyCode::Digit2 => {
                scene.set_mode(RenderMode::ZBuffer);
                InputResponse::Redraw
            }
            KeyCode::Digit3 => {
                scene.set_mode(RenderMode::PainterAlgorithm);
                InputResponse::Redraw
            }
            KeyCode::ArrowLeft => {
                scene.rotate_by(-ROTATION_STEP_DEG);
                InputResponse::Redraw
            }
            KeyCode::ArrowRight => {
                scene.rotate_by(ROTATION_STEP_DEG);
                InputResponse::Redraw
            }
            KeyCode::Escape => InputResponse::Exit,
            _ => InputResponse::Ignored,
        }
    }
}

impl Default for DemoController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let mut s = Scene::new(Vec::new());
        s.rotation_deg = 10.0;
        s
    }

    #[test]
    fn test_digits_select_modes_and_keep_rotation() {
        let cases = [
            (KeyCode::Digit0, RenderMode::None),
            (KeyCode::Digit1, RenderMode::BackFaceCulling),
            (KeyCode::Digit2, RenderMode::ZBuffer),
            (KeyCode::Digit3, RenderMode::PainterAlgorithm),
        ];
        let mut controller = DemoController::new();
        for (code, expected) in cases {
            let mut s = scene();
            let response = controller.handle_key(code, &mut s);
            assert_eq!(response, InputResponse::Redraw);
            assert_eq!(s.mode, expected);
            assert_eq!(s.rotation_deg, 10.0);
        }
    }

    #[test]
    fn test_arrows_rotate_by_five_degrees() {
        let mut controller = DemoController::new();
        let mut s = scene();
        assert_eq!(
            controller.handle_key(KeyCode::ArrowRight, &mut s),
            InputResponse::Redraw
        );
        assert_eq!(s.rotation_deg, 15.0);
        assert_eq!(
            controller.handle_key(KeyCode::ArrowLeft, &mut s),
            InputResponse::Redraw
        );
        assert_eq!(s.rotation_deg, 10.0);
    }

    #[test]
    fn test_arrow_rotation_wraps() {
        let mut controller = DemoController::new();
        let mut s = scene();
        s.rotation_deg = 358.0;
        controller.handle_key(KeyCode::ArrowRight, &mut s);
        assert_eq!(s.rotation_deg, 3.0);
        controller.handle_key(KeyCode::ArrowRight, &mut s);
        assert_eq!(s.rotation_deg, 8.0);

        s.rotation_deg = 2.0;
        controller.handle_key(KeyCode::ArrowLeft, &mut s);
        assert_eq!(s.rotation_deg, 357.0);
    }

    #[test]
    fn test_escape_requests_exit() {
        let mut controller = DemoController::new();
        let mut s = scene();
        assert_eq!(
            controller.handle_key(KeyCode::Escape, &mut s),
            InputResponse::Exit
        );
        // Exit changes no scene state.
        assert_eq!(s.mode, RenderMode::None);
        assert_eq!(s.rotation_deg, 10.0);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut controller = DemoController::new();
        let mut s = scene();
        s.set_mode(RenderMode::ZBuffer);
        for code in [KeyCode::KeyA, KeyCode::Space, KeyCode::ArrowUp, KeyCode::F1] {
            assert_eq!(controller.handle_key(code, &mut s), InputResponse::Ignored);
        }
        assert_eq!(s.mode, RenderMode::ZBuffer);
        assert_eq!(s.rotation_deg, 10.0);
    }
}

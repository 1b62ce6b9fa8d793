// src/ui.rs
use crate::engine_lib::scene_types::RenderMode;

pub fn build_ui(ctx: &egui::Context, mode: RenderMode) {
    egui::Window::new("Hidden Surface Removal")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Active method: {}", mode.label()));
                ui.separator();

                ui.label("Keyboard Controls:");
                ui.label("   0: No hidden surface removal");
                ui.label("   1: Back-face culling");
                ui.label("   2: Z-buffer");
                ui.label("   3: Painter's algorithm");
                ui.label("   Left/Right Arrows: Rotate scene");
                ui.label("   Escape: Quit");
            });
        });
}

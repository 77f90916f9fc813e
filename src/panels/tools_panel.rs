use eframe::egui;

use crate::app::PixelApp;
use crate::color::Color;
use crate::state::StateUpdate;
use crate::tools::{Tool, ToolKind};

pub fn tools_panel(app: &mut PixelApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            for tool in ToolKind::ALL {
                let selected = app.state().tool == tool;
                if ui.selectable_label(selected, tool.name()).clicked() {
                    log::info!("tool selected from UI: {}", tool.name());
                    app.dispatch(StateUpdate::set_tool(tool));
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color32 = app.state().color.to_color32();
                let response = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color32,
                    egui::color_picker::Alpha::Opaque,
                );
                if response.changed() {
                    app.dispatch(StateUpdate::set_color(Color::from_color32(color32)));
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.state().can_undo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.dispatch(StateUpdate::undo());
                }
                ui.label(format!("{} steps", app.state().history.len()));
            });

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        app.save_picture();
                    }
                    if ui.button("Load").clicked() {
                        app.start_load();
                    }
                });
            }

            if let Some(message) = app.error_message() {
                ui.separator();
                ui.colored_label(egui::Color32::RED, message);
                if ui.button("Dismiss").clicked() {
                    app.clear_error();
                }
            }
        });
}

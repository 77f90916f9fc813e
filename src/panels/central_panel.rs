use eframe::egui::{self, PointerButton};

use crate::app::PixelApp;
use crate::input::{InputEvent, to_grid};

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

pub fn central_panel(app: &mut PixelApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        app.sync_renderer(ctx);

        let (response, painter) =
            ui.allocate_painter(app.surface_size(), egui::Sense::click_and_drag());
        app.paint_canvas(&painter, response.rect);

        for event in collect_events(ctx, response.rect) {
            app.handle_input(event);
        }
    });
}

/// Translate this frame's pointer activity into grid-space input events.
/// Presses only count inside the canvas; moves are reported regardless so
/// a drag can leave the canvas and keep painting clipped shapes.
fn collect_events(ctx: &egui::Context, canvas: egui::Rect) -> Vec<InputEvent> {
    let mut events = Vec::new();
    ctx.input(|input| {
        if let Some(pointer) = input.pointer.interact_pos() {
            for button in BUTTONS {
                if input.pointer.button_pressed(button) && canvas.contains(pointer) {
                    events.push(InputEvent::PointerDown {
                        pos: to_grid(pointer, canvas.min),
                        button,
                    });
                }
            }

            let held_buttons: Vec<PointerButton> = BUTTONS
                .into_iter()
                .filter(|&button| input.pointer.button_down(button))
                .collect();
            events.push(InputEvent::PointerMove {
                pos: to_grid(pointer, canvas.min),
                held_buttons,
            });
        }

        if input.pointer.button_released(PointerButton::Primary) {
            events.push(InputEvent::PointerUp);
        }
    });
    events
}

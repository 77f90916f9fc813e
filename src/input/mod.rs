use egui::{PointerButton, Pos2};

use crate::geometry::Position;
use crate::renderer::SCALE;

mod gestures;
pub use gestures::GestureController;

/// Pointer activity over the canvas, already translated to grid space
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A button went down
    PointerDown {
        pos: Position,
        button: PointerButton,
    },
    /// The pointer moved; carries the buttons currently held
    PointerMove {
        pos: Position,
        held_buttons: Vec<PointerButton>,
    },
    /// The primary button was released
    PointerUp,
}

/// Convert a device position to grid coordinates.
///
/// Floors the scaled offset from the canvas origin and clamps to zero on
/// each axis. There is no upper clamp: dragging past the right or bottom
/// edge produces positions beyond the picture, which tools clip.
pub fn to_grid(pointer: Pos2, canvas_origin: Pos2) -> Position {
    let x = ((pointer.x - canvas_origin.x) / SCALE as f32).floor().max(0.0);
    let y = ((pointer.y - canvas_origin.y) / SCALE as f32).floor().max(0.0);
    Position::new(x as u32, y as u32)
}

use crate::error::EditorError;
use crate::geometry::{Position, rect_corners};
use crate::state::StateUpdate;

use super::{GestureSession, Snapshot, Tool, ToolOutput, draw_cells};

/// Filled axis-aligned rectangle between the gesture origin and the
/// pointer, inclusive of both corners. Recomputed in full from the frozen
/// picture on every move; either corner may come first.
#[derive(Debug, Clone, Copy)]
pub struct RectangleTool;

fn rect_cells(a: Position, b: Position, width: u32, height: u32) -> Vec<Position> {
    let (min, max) = rect_corners(a, b);
    if min.x >= width || min.y >= height {
        return Vec::new();
    }
    let x_end = max.x.min(width - 1);
    let y_end = max.y.min(height - 1);
    let mut cells = Vec::new();
    for y in min.y..=y_end {
        for x in min.x..=x_end {
            cells.push(Position::new(x, y));
        }
    }
    cells
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        let picture = &snapshot.picture;
        let cells = rect_cells(origin, origin, picture.width(), picture.height());
        let update = draw_cells(picture, snapshot.color, cells)?;
        Ok(ToolOutput::dragging(update))
    }

    fn drag(
        &self,
        session: &mut GestureSession,
        _live: &Snapshot,
        pos: Position,
    ) -> Result<Option<StateUpdate>, EditorError> {
        let snapshot = &session.snapshot;
        let picture = &snapshot.picture;
        let cells = rect_cells(session.origin, pos, picture.width(), picture.height());
        draw_cells(picture, snapshot.color, cells)
    }
}

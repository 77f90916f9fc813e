use crate::error::EditorError;
use crate::geometry::{Position, disc};
use crate::state::StateUpdate;

use super::{GestureSession, Snapshot, Tool, ToolOutput, draw_cells};

/// Filled circle centered on the gesture origin, with radius the distance
/// to the pointer. Clipped to the grid and recomputed from the frozen
/// picture on every move.
#[derive(Debug, Clone, Copy)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        // Radius zero: just the center cell
        let picture = &snapshot.picture;
        let cells = disc(origin, 0.0, picture.width(), picture.height());
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
        let radius = session.origin.distance(pos);
        let cells = disc(session.origin, radius, picture.width(), picture.height());
        draw_cells(picture, snapshot.color, cells)
    }
}

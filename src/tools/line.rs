use crate::error::EditorError;
use crate::geometry::{Position, segment};
use crate::state::StateUpdate;

use super::{GestureSession, Snapshot, Tool, ToolOutput, draw_cells};

/// Straight line from the gesture origin to the pointer.
///
/// Every move redraws the full segment on the picture frozen at gesture
/// start, so the previous partial line is overwritten instead of
/// accumulating.
#[derive(Debug, Clone, Copy)]
pub struct LineTool;

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "line"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        let update = draw_cells(&snapshot.picture, snapshot.color, [origin])?;
        Ok(ToolOutput::dragging(update))
    }

    fn drag(
        &self,
        session: &mut GestureSession,
        _live: &Snapshot,
        pos: Position,
    ) -> Result<Option<StateUpdate>, EditorError> {
        let snapshot = &session.snapshot;
        draw_cells(
            &snapshot.picture,
            snapshot.color,
            segment(session.origin, pos),
        )
    }
}

use crate::error::EditorError;
use crate::geometry::{Position, segment};
use crate::state::StateUpdate;

use super::{GestureSession, Snapshot, Tool, ToolOutput, draw_cells};

/// Freehand painting.
///
/// Each move paints the interpolated segment from the previous anchor to
/// the new position, so a pointer moving faster than the sampling rate
/// still leaves a connected stroke. Unlike the shape tools, paint draws
/// on the live picture: every step accumulates on top of the last one.
#[derive(Debug, Clone, Copy)]
pub struct PaintTool;

impl Tool for PaintTool {
    fn name(&self) -> &'static str {
        "paint"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        let update = draw_cells(&snapshot.picture, snapshot.color, [origin])?;
        Ok(ToolOutput::dragging(update))
    }

    fn drag(
        &self,
        session: &mut GestureSession,
        live: &Snapshot,
        pos: Position,
    ) -> Result<Option<StateUpdate>, EditorError> {
        let stroke = segment(session.anchor, pos);
        session.anchor = pos;
        draw_cells(&live.picture, live.color, stroke)
    }
}

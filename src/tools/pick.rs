use crate::error::EditorError;
use crate::geometry::Position;
use crate::state::StateUpdate;

use super::{Snapshot, Tool, ToolOutput};

/// Color picker: makes the clicked cell's color the current drawing
/// color. Leaves the picture alone.
#[derive(Debug, Clone, Copy)]
pub struct PickTool;

impl Tool for PickTool {
    fn name(&self) -> &'static str {
        "pick"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        let picture = &snapshot.picture;
        if !picture.in_bounds(origin.x, origin.y) {
            return Ok(ToolOutput::one_shot(None));
        }
        let color = picture.color_at(origin.x, origin.y)?;
        Ok(ToolOutput::one_shot(Some(StateUpdate::set_color(color))))
    }
}

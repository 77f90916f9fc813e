use std::collections::{HashSet, VecDeque};

use crate::error::EditorError;
use crate::geometry::Position;
use crate::picture::PixelEdit;
use crate::state::StateUpdate;

use super::{Snapshot, Tool, ToolOutput};

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Flood fill: recolors the 4-connected region matching the clicked
/// cell's color. Breadth-first over an explicit frontier with a visited
/// set, so it terminates even when the region already has the fill color.
#[derive(Debug, Clone, Copy)]
pub struct FillTool;

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        let picture = &snapshot.picture;
        if !picture.in_bounds(origin.x, origin.y) {
            log::warn!("fill at ({}, {}) outside the canvas", origin.x, origin.y);
            return Ok(ToolOutput::one_shot(None));
        }
        let target = picture.color_at(origin.x, origin.y)?;

        let mut visited = HashSet::from([(origin.x, origin.y)]);
        let mut frontier = VecDeque::from([origin]);
        let mut edits = Vec::new();
        while let Some(cell) = frontier.pop_front() {
            edits.push(PixelEdit::new(cell.x, cell.y, snapshot.color));
            for (dx, dy) in NEIGHBORS {
                let nx = cell.x as i64 + dx;
                let ny = cell.y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as u32, ny as u32);
                if !picture.in_bounds(nx, ny) || visited.contains(&(nx, ny)) {
                    continue;
                }
                if picture.color_at(nx, ny)? == target {
                    visited.insert((nx, ny));
                    frontier.push_back(Position::new(nx, ny));
                }
            }
        }

        log::debug!("fill recolored {} cells", edits.len());
        let update = StateUpdate::set_picture(picture.update_ref(&edits)?);
        Ok(ToolOutput::one_shot(Some(update)))
    }
}

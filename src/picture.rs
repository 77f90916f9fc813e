use std::sync::Arc;

use crate::color::Color;
use crate::error::EditorError;

/// Reference-counted handle to an immutable picture.
///
/// The current picture and every undo-history entry may share the same
/// allocation; that is safe because a `Picture` is never mutated after
/// construction.
pub type PictureRef = Arc<Picture>;

/// A single-cell change, produced and consumed within one tool step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelEdit {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

impl PixelEdit {
    pub fn new(x: u32, y: u32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Immutable fixed-resolution color grid, addressed row-major by (x, y)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: u32,
    height: u32,
    cells: Vec<Color>,
}

impl Picture {
    /// Create a picture with every cell set to `fill`
    pub fn create(width: u32, height: u32, fill: Color) -> Result<Self, EditorError> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        })
    }

    /// Create a picture and wrap it for sharing
    pub fn create_ref(width: u32, height: u32, fill: Color) -> Result<PictureRef, EditorError> {
        Self::create(width, height, fill).map(Arc::new)
    }

    /// Build a picture from row-major cells, e.g. sampled from a decoded
    /// bitmap. The cell count must match the dimensions exactly.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Color>) -> Result<Self, EditorError> {
        if width == 0 || height == 0 || cells.len() != (width * height) as usize {
            return Err(EditorError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, EditorError> {
        if self.in_bounds(x, y) {
            Ok((y * self.width + x) as usize)
        } else {
            Err(EditorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn color_at(&self, x: u32, y: u32) -> Result<Color, EditorError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Row-major view of every cell, for whole-grid consumers (rendering,
    /// export) that iterate in bounds by construction
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Copy-on-write update: returns a new picture with the edited cells
    /// overwritten (last edit wins per coordinate) and everything else
    /// identical to the receiver. Any out-of-range edit fails the whole
    /// call without producing a picture.
    pub fn update(&self, edits: &[PixelEdit]) -> Result<Self, EditorError> {
        let mut cells = self.cells.clone();
        for edit in edits {
            let index = self.index(edit.x, edit.y)?;
            cells[index] = edit.color;
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            cells,
        })
    }

    /// `update` wrapped for sharing
    pub fn update_ref(&self, edits: &[PixelEdit]) -> Result<PictureRef, EditorError> {
        self.update(edits).map(Arc::new)
    }
}

use thiserror::Error;

/// Errors produced by the picture model and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A picture was requested with a zero width or height
    #[error("invalid picture dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A cell outside the grid was addressed.
    /// Tools clip before touching the model, so hitting this means a tool bug.
    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Text that does not parse as a "#rrggbb" color
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// An image file could not be opened or decoded
    #[error("load failed: {0}")]
    LoadFailure(String),

    /// The exported image could not be encoded or written
    #[error("save failed: {0}")]
    SaveFailure(String),
}

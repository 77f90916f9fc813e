use crate::color::Color;
use crate::error::EditorError;
use crate::geometry::Position;
use crate::picture::{PictureRef, PixelEdit};
use crate::state::{EditorState, StateUpdate};

mod circle;
mod fill;
mod line;
mod paint;
mod pick;
mod rectangle;

pub use circle::CircleTool;
pub use fill::FillTool;
pub use line::LineTool;
pub use paint::PaintTool;
pub use pick::PickTool;
pub use rectangle::RectangleTool;

/// The slice of editor state a tool is allowed to see: the picture it
/// draws on and the color it draws with
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub picture: PictureRef,
    pub color: Color,
}

impl Snapshot {
    pub fn of(state: &EditorState) -> Self {
        Self {
            picture: state.picture.clone(),
            color: state.color,
        }
    }
}

/// One pointer-down-to-pointer-up interaction.
///
/// Holds everything a drag continuation needs explicitly: the tool, the
/// start position, the advancing anchor (freehand painting), and the state
/// snapshot frozen when the gesture began. Later dispatches never leak
/// into `snapshot`.
#[derive(Debug, Clone)]
pub struct GestureSession {
    pub tool: ToolKind,
    pub origin: Position,
    pub anchor: Position,
    pub snapshot: Snapshot,
}

impl GestureSession {
    pub fn new(tool: ToolKind, origin: Position, snapshot: Snapshot) -> Self {
        Self {
            tool,
            origin,
            anchor: origin,
            snapshot,
        }
    }
}

/// What a tool produced at gesture start
#[derive(Debug)]
pub struct ToolOutput {
    /// The update to dispatch, if the gesture changed anything
    pub update: Option<StateUpdate>,
    /// Whether the tool wants pointer-move callbacks for this gesture
    pub drags: bool,
}

impl ToolOutput {
    fn one_shot(update: Option<StateUpdate>) -> Self {
        Self {
            update,
            drags: false,
        }
    }

    fn dragging(update: Option<StateUpdate>) -> Self {
        Self { update, drags: true }
    }
}

/// Interface shared by all drawing tools.
///
/// Tools are stateless; everything a gesture accumulates lives in its
/// [`GestureSession`]. Tools clip to the picture bounds themselves and
/// never hand an out-of-range edit to the model.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Invoked once at gesture start with the frozen state snapshot
    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError>;

    /// Invoked on each pointer move while the gesture stays active.
    /// `live` is the state as of the latest dispatch; tools that recompute
    /// from the gesture start use `session.snapshot` instead.
    fn drag(
        &self,
        _session: &mut GestureSession,
        _live: &Snapshot,
        _pos: Position,
    ) -> Result<Option<StateUpdate>, EditorError> {
        Ok(None)
    }
}

/// Clip `cells` to the picture, then produce the picture update painting
/// them in `color`. Returns `None` when every cell fell outside the grid.
fn draw_cells(
    picture: &PictureRef,
    color: Color,
    cells: impl IntoIterator<Item = Position>,
) -> Result<Option<StateUpdate>, EditorError> {
    let edits: Vec<PixelEdit> = cells
        .into_iter()
        .filter(|cell| picture.in_bounds(cell.x, cell.y))
        .map(|cell| PixelEdit::new(cell.x, cell.y, color))
        .collect();
    if edits.is_empty() {
        return Ok(None);
    }
    Ok(Some(StateUpdate::set_picture(picture.update_ref(&edits)?)))
}

/// Enum of all available tools.
///
/// Dispatching through an enum instead of `Box<dyn Tool>` keeps tools
/// copyable and lets the UI iterate the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ToolKind {
    Paint,
    Line,
    Rectangle,
    Circle,
    Fill,
    Pick,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Paint,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Fill,
        ToolKind::Pick,
    ];
}

impl Tool for ToolKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Paint => PaintTool.name(),
            Self::Line => LineTool.name(),
            Self::Rectangle => RectangleTool.name(),
            Self::Circle => CircleTool.name(),
            Self::Fill => FillTool.name(),
            Self::Pick => PickTool.name(),
        }
    }

    fn begin(&self, origin: Position, snapshot: &Snapshot) -> Result<ToolOutput, EditorError> {
        match self {
            Self::Paint => PaintTool.begin(origin, snapshot),
            Self::Line => LineTool.begin(origin, snapshot),
            Self::Rectangle => RectangleTool.begin(origin, snapshot),
            Self::Circle => CircleTool.begin(origin, snapshot),
            Self::Fill => FillTool.begin(origin, snapshot),
            Self::Pick => PickTool.begin(origin, snapshot),
        }
    }

    fn drag(
        &self,
        session: &mut GestureSession,
        live: &Snapshot,
        pos: Position,
    ) -> Result<Option<StateUpdate>, EditorError> {
        match self {
            Self::Paint => PaintTool.drag(session, live, pos),
            Self::Line => LineTool.drag(session, live, pos),
            Self::Rectangle => RectangleTool.drag(session, live, pos),
            Self::Circle => CircleTool.drag(session, live, pos),
            Self::Fill => FillTool.drag(session, live, pos),
            Self::Pick => PickTool.drag(session, live, pos),
        }
    }
}

/// Look a tool up by its UI name
pub fn new_tool(name: &str) -> Option<ToolKind> {
    ToolKind::ALL.into_iter().find(|tool| tool.name() == name)
}

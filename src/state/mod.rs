mod history;
pub use history::{MAX_UNDO_STEPS, PictureHistory};

use crate::color::Color;
use crate::picture::{Picture, PictureRef};
use crate::tools::ToolKind;

/// Picture dispatches closer together than this are coalesced into a
/// single undo step
pub const COALESCE_WINDOW_MS: u64 = 1000;

/// Dimensions and fill of the picture shown at startup
pub const DEFAULT_WIDTH: u32 = 60;
pub const DEFAULT_HEIGHT: u32 = 30;

/// A partial state update, as dispatched by tools and UI controls.
/// Absent fields leave the corresponding state field untouched.
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    pub tool: Option<ToolKind>,
    pub color: Option<Color>,
    pub picture: Option<PictureRef>,
    pub undo: bool,
}

impl StateUpdate {
    pub fn set_tool(tool: ToolKind) -> Self {
        Self {
            tool: Some(tool),
            ..Self::default()
        }
    }

    pub fn set_color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn set_picture(picture: PictureRef) -> Self {
        Self {
            picture: Some(picture),
            ..Self::default()
        }
    }

    pub fn undo() -> Self {
        Self {
            undo: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tool.is_none() && self.color.is_none() && self.picture.is_none() && !self.undo
    }
}

/// The complete editor state. Every dispatch produces a fresh value via
/// [`EditorState::apply`]; nothing here is ever mutated in place.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub tool: ToolKind,
    pub color: Color,
    pub picture: PictureRef,
    pub history: PictureHistory,
    pub last_commit_ms: u64,
}

impl EditorState {
    pub fn new(picture: PictureRef) -> Self {
        Self {
            tool: ToolKind::Paint,
            color: Color::BLACK,
            picture,
            history: PictureHistory::new(),
            last_commit_ms: 0,
        }
    }

    /// The blank state shown at startup
    pub fn startup() -> Self {
        let picture = Picture::create_ref(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color::CANVAS)
            .expect("default picture dimensions are valid");
        Self::new(picture)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Pure reducer: merge a partial update into a new state.
    ///
    /// An undo with empty history is a no-op, not an error. A picture
    /// update pushes the outgoing picture onto the history only when the
    /// last push is at least [`COALESCE_WINDOW_MS`] old, so a rapid drag
    /// stroke collapses into one undo step per rolling window.
    pub fn apply(&self, update: StateUpdate, now_ms: u64) -> EditorState {
        let mut next = self.clone();

        if update.undo {
            let Some(previous) = next.history.pop() else {
                return next;
            };
            next.picture = previous;
            next.last_commit_ms = 0;
        } else if let Some(picture) = update.picture {
            if now_ms >= self.last_commit_ms + COALESCE_WINDOW_MS {
                next.history.push(self.picture.clone());
                next.last_commit_ms = now_ms;
            }
            next.picture = picture;
        }

        if let Some(tool) = update.tool {
            next.tool = tool;
        }
        if let Some(color) = update.color {
            next.color = color;
        }
        next
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::startup()
    }
}

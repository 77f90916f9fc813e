use egui::PointerButton;

use crate::error::EditorError;
use crate::geometry::Position;
use crate::state::{EditorState, StateUpdate};
use crate::tools::{GestureSession, Snapshot, Tool, ToolOutput};

use super::InputEvent;

/// Per-gesture state machine.
///
/// Idle until a primary-button press invokes the active tool; if the tool
/// tracks the drag, a [`GestureSession`] is held until the button is
/// released (or a move arrives with no buttons held, when the release
/// happened outside the window). Non-primary presses never transition.
#[derive(Default)]
pub struct GestureController {
    session: Option<GestureSession>,
    last: Option<Position>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one input event; returns the update to dispatch, if any
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        state: &EditorState,
    ) -> Result<Option<StateUpdate>, EditorError> {
        match event {
            InputEvent::PointerDown { pos, button } => self.pointer_down(pos, button, state),
            InputEvent::PointerMove { pos, held_buttons } => {
                self.pointer_move(pos, &held_buttons, state)
            }
            InputEvent::PointerUp => {
                self.finish();
                Ok(None)
            }
        }
    }

    fn pointer_down(
        &mut self,
        pos: Position,
        button: PointerButton,
        state: &EditorState,
    ) -> Result<Option<StateUpdate>, EditorError> {
        if button != PointerButton::Primary || self.session.is_some() {
            return Ok(None);
        }

        let snapshot = Snapshot::of(state);
        let ToolOutput { update, drags } = state.tool.begin(pos, &snapshot)?;
        if drags {
            self.session = Some(GestureSession::new(state.tool, pos, snapshot));
            self.last = Some(pos);
        }
        Ok(update)
    }

    fn pointer_move(
        &mut self,
        pos: Position,
        held_buttons: &[PointerButton],
        state: &EditorState,
    ) -> Result<Option<StateUpdate>, EditorError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if held_buttons.is_empty() {
            // Release without a distinct up event
            self.finish();
            return Ok(None);
        }
        if self.last == Some(pos) {
            return Ok(None);
        }
        self.last = Some(pos);

        let live = Snapshot::of(state);
        let tool = session.tool;
        tool.drag(session, &live, pos)
    }

    fn finish(&mut self) {
        self.session = None;
        self.last = None;
    }
}

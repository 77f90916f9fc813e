use eframe::egui;

use crate::color::Color;
use crate::error::EditorError;
use crate::file_handler::FileHandler;
use crate::input::{GestureController, InputEvent};
use crate::panels;
use crate::picture::PictureRef;
use crate::renderer::Renderer;
use crate::state::{EditorState, StateUpdate};
use crate::tools::ToolKind;
use crate::util::time::now_ms;

/// The UI preferences worth keeping across sessions. The picture and its
/// undo history are deliberately not persisted; a session starts blank.
#[derive(serde::Serialize, serde::Deserialize)]
struct Preferences {
    tool: ToolKind,
    color: Color,
}

impl Preferences {
    fn of(state: &EditorState) -> Self {
        Self {
            tool: state.tool,
            color: state.color,
        }
    }
}

pub struct PixelApp {
    state: EditorState,
    gestures: GestureController,
    renderer: Renderer,
    files: FileHandler,
    error: Option<String>,
}

impl PixelApp {
    /// Called once before the first frame
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = EditorState::startup();
        if let Some(storage) = cc.storage {
            if let Some(prefs) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
                state.tool = prefs.tool;
                state.color = prefs.color;
            }
        }

        Self {
            state,
            gestures: GestureController::new(),
            renderer: Renderer::new(),
            files: FileHandler::new(),
            error: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Run a partial update through the reducer, replacing the state
    pub fn dispatch(&mut self, update: StateUpdate) {
        log::debug!(
            "dispatch: tool={:?} color={:?} picture={} undo={}",
            update.tool,
            update.color,
            update.picture.is_some(),
            update.undo
        );
        self.state = self.state.apply(update, now_ms());
    }

    /// Feed a canvas input event to the gesture controller and dispatch
    /// whatever it produced
    pub fn handle_input(&mut self, event: InputEvent) {
        match self.gestures.handle_event(event, &self.state) {
            Ok(Some(update)) => self.dispatch(update),
            Ok(None) => {}
            Err(err) => {
                // A tool handed the model an out-of-range edit; make it
                // visible instead of dropping it
                log::error!("tool failure: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn sync_renderer(&mut self, ctx: &egui::Context) {
        self.renderer.sync(ctx, &self.state.picture);
    }

    pub fn surface_size(&self) -> egui::Vec2 {
        self.renderer.surface_size()
    }

    pub fn paint_canvas(&self, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.paint(painter, rect);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start_load(&mut self) {
        self.files.start_load();
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_picture(&mut self) {
        if let Err(err) = self.files.save(&self.state.picture) {
            log::error!("{err}");
            self.error = Some(err.to_string());
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.clone()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn finish_load(&mut self, outcome: Result<PictureRef, EditorError>) {
        match outcome {
            Ok(picture) => self.dispatch(StateUpdate::set_picture(picture)),
            Err(err) => {
                // The current picture stays untouched on a failed load
                log::error!("{err}");
                self.error = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for PixelApp {
    /// Called by the framework to save state before shutdown
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &Preferences::of(&self.state));
    }

    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.files.poll() {
            self.finish_load(outcome);
        }
        if let Some(outcome) = self.files.check_dropped_files(ctx) {
            self.finish_load(outcome);
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

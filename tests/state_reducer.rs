use std::sync::Arc;

use pixel_paint::state::{COALESCE_WINDOW_MS, MAX_UNDO_STEPS};
use pixel_paint::{Color, EditorState, Picture, PictureRef, StateUpdate, ToolKind};

fn color(hex: &str) -> Color {
    hex.parse().expect("test colors are well-formed")
}

fn swatch(hex: &str) -> PictureRef {
    Picture::create_ref(3, 3, color(hex)).unwrap()
}

fn base_state() -> EditorState {
    EditorState::new(swatch("#ffffff"))
}

#[test]
fn picture_update_pushes_the_outgoing_picture() {
    let state = base_state();
    let original = state.picture.clone();
    let edited = swatch("#111111");

    let next = state.apply(StateUpdate::set_picture(edited.clone()), 10_000);
    assert!(Arc::ptr_eq(&next.picture, &edited));
    assert_eq!(next.history.len(), 1);
    assert_eq!(next.last_commit_ms, 10_000);

    // The history entry is the pre-edit picture, shared, not copied
    let undone = next.apply(StateUpdate::undo(), 10_500);
    assert!(Arc::ptr_eq(&undone.picture, &original));
}

#[test]
fn rapid_updates_coalesce_into_one_undo_step() {
    let state = base_state();
    let state = state.apply(StateUpdate::set_picture(swatch("#111111")), 10_000);
    let state = state.apply(StateUpdate::set_picture(swatch("#222222")), 10_400);
    let state = state.apply(StateUpdate::set_picture(swatch("#333333")), 10_900);
    assert_eq!(state.history.len(), 1, "sub-second edits share one entry");

    // One undo jumps all the way back to the original
    let undone = state.apply(StateUpdate::undo(), 11_000);
    assert_eq!(undone.picture.color_at(0, 0).unwrap(), color("#ffffff"));
}

#[test]
fn spaced_updates_get_separate_undo_steps() {
    let state = base_state();
    let state = state.apply(StateUpdate::set_picture(swatch("#111111")), 10_000);
    let state = state.apply(
        StateUpdate::set_picture(swatch("#222222")),
        10_000 + COALESCE_WINDOW_MS,
    );
    assert_eq!(state.history.len(), 2, "window boundary is inclusive");
}

#[test]
fn undo_walks_back_step_by_step() {
    let state = base_state();
    let state = state.apply(StateUpdate::set_picture(swatch("#111111")), 10_000);
    let state = state.apply(StateUpdate::set_picture(swatch("#222222")), 12_000);
    let state = state.apply(StateUpdate::set_picture(swatch("#333333")), 14_000);
    assert_eq!(state.history.len(), 3);

    let state = state.apply(StateUpdate::undo(), 15_000);
    assert_eq!(state.picture.color_at(0, 0).unwrap(), color("#222222"));
    let state = state.apply(StateUpdate::undo(), 15_100);
    assert_eq!(state.picture.color_at(0, 0).unwrap(), color("#111111"));
    let state = state.apply(StateUpdate::undo(), 15_200);
    assert_eq!(state.picture.color_at(0, 0).unwrap(), color("#ffffff"));
    assert!(!state.can_undo());
}

#[test]
fn undo_with_empty_history_is_a_noop() {
    let state = base_state();
    let next = state.apply(StateUpdate::undo(), 10_000);
    assert!(Arc::ptr_eq(&next.picture, &state.picture));
    assert!(next.history.is_empty());
}

#[test]
fn undo_reopens_the_coalescing_window() {
    let state = base_state();
    let state = state.apply(StateUpdate::set_picture(swatch("#111111")), 10_000);
    let state = state.apply(StateUpdate::undo(), 10_100);
    assert_eq!(state.last_commit_ms, 0);

    // The very next edit gets its own history entry despite arriving
    // inside the previous window
    let state = state.apply(StateUpdate::set_picture(swatch("#222222")), 10_200);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn undo_merges_accompanying_fields() {
    let state = base_state();
    let state = state.apply(StateUpdate::set_picture(swatch("#111111")), 10_000);

    let update = StateUpdate {
        undo: true,
        tool: Some(ToolKind::Fill),
        ..StateUpdate::default()
    };
    let next = state.apply(update, 11_000);
    assert_eq!(next.tool, ToolKind::Fill);
    assert_eq!(next.picture.color_at(0, 0).unwrap(), color("#ffffff"));
}

#[test]
fn tool_and_color_merges_leave_history_alone() {
    let state = base_state();
    let next = state.apply(StateUpdate::set_tool(ToolKind::Circle), 10_000);
    let next = next.apply(StateUpdate::set_color(color("#123456")), 11_000);

    assert_eq!(next.tool, ToolKind::Circle);
    assert_eq!(next.color, color("#123456"));
    assert!(next.history.is_empty());
    assert!(Arc::ptr_eq(&next.picture, &state.picture));
}

#[test]
fn history_is_capped_and_evicts_the_oldest() {
    let mut state = base_state();
    for i in 0..MAX_UNDO_STEPS as u64 + 16 {
        let hex = format!("#{:06x}", i);
        let picture = Picture::create_ref(3, 3, hex.parse().unwrap()).unwrap();
        // Always beyond the window, so every edit would push
        state = state.apply(StateUpdate::set_picture(picture), (i + 1) * 2_000);
    }
    assert_eq!(state.history.len(), MAX_UNDO_STEPS);
}

#[test]
fn startup_state_matches_the_defaults() {
    let state = EditorState::startup();
    assert_eq!(state.tool, ToolKind::Paint);
    assert_eq!(state.color, color("#000000"));
    assert_eq!(state.picture.width(), 60);
    assert_eq!(state.picture.height(), 30);
    assert_eq!(state.picture.color_at(59, 29).unwrap(), color("#f0f0f0"));
    assert!(!state.can_undo());
    assert_eq!(state.last_commit_ms, 0);
}

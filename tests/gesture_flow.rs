use egui::{PointerButton, Pos2};
use pixel_paint::input::to_grid;
use pixel_paint::{
    Color, EditorState, GestureController, InputEvent, Picture, Position, StateUpdate, ToolKind,
};

fn color(hex: &str) -> Color {
    hex.parse().expect("test colors are well-formed")
}

fn paint_state() -> EditorState {
    let mut state = EditorState::new(Picture::create_ref(8, 8, color("#ffffff")).unwrap());
    state.tool = ToolKind::Paint;
    state
}

fn down(x: u32, y: u32) -> InputEvent {
    InputEvent::PointerDown {
        pos: Position::new(x, y),
        button: PointerButton::Primary,
    }
}

fn drag_to(x: u32, y: u32) -> InputEvent {
    InputEvent::PointerMove {
        pos: Position::new(x, y),
        held_buttons: vec![PointerButton::Primary],
    }
}

/// Feed one event and fold any resulting update into the state
fn step(
    controller: &mut GestureController,
    state: &mut EditorState,
    event: InputEvent,
    now: u64,
) -> bool {
    let update = controller
        .handle_event(event, state)
        .expect("tools never hand out-of-range edits to the model");
    match update {
        Some(update) => {
            *state = state.apply(update, now);
            true
        }
        None => false,
    }
}

#[test]
fn primary_press_invokes_the_tool_and_starts_dragging() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    assert!(step(&mut controller, &mut state, down(1, 1), 10_000));
    assert!(controller.is_dragging());
    assert_eq!(state.picture.color_at(1, 1).unwrap(), color("#000000"));
}

#[test]
fn non_primary_presses_are_ignored() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    for button in [PointerButton::Secondary, PointerButton::Middle] {
        let event = InputEvent::PointerDown {
            pos: Position::new(1, 1),
            button,
        };
        assert!(!step(&mut controller, &mut state, event, 10_000));
        assert!(!controller.is_dragging());
    }
    assert_eq!(state.picture.color_at(1, 1).unwrap(), color("#ffffff"));
}

#[test]
fn moves_without_a_session_do_nothing() {
    let mut controller = GestureController::new();
    let mut state = paint_state();
    assert!(!step(&mut controller, &mut state, drag_to(3, 3), 10_000));
}

#[test]
fn dragging_paints_along_the_path() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    step(&mut controller, &mut state, down(0, 0), 10_000);
    step(&mut controller, &mut state, drag_to(3, 0), 10_050);

    for x in 0..=3 {
        assert_eq!(state.picture.color_at(x, 0).unwrap(), color("#000000"));
    }
    // One gesture inside the window, one undo entry
    assert_eq!(state.history.len(), 1);
}

#[test]
fn repeated_positions_are_dropped() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    step(&mut controller, &mut state, down(2, 2), 10_000);
    // Same cell as the press: no new update
    assert!(!step(&mut controller, &mut state, drag_to(2, 2), 10_020));
    assert!(step(&mut controller, &mut state, drag_to(3, 2), 10_040));
    assert!(!step(&mut controller, &mut state, drag_to(3, 2), 10_060));
}

#[test]
fn moving_with_no_buttons_held_ends_the_gesture() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    step(&mut controller, &mut state, down(0, 0), 10_000);
    assert!(controller.is_dragging());

    let release = InputEvent::PointerMove {
        pos: Position::new(4, 4),
        held_buttons: Vec::new(),
    };
    assert!(!step(&mut controller, &mut state, release, 10_050));
    assert!(!controller.is_dragging());

    // The stranded move did not paint
    assert_eq!(state.picture.color_at(4, 4).unwrap(), color("#ffffff"));
}

#[test]
fn pointer_up_ends_the_gesture() {
    let mut controller = GestureController::new();
    let mut state = paint_state();

    step(&mut controller, &mut state, down(0, 0), 10_000);
    step(&mut controller, &mut state, InputEvent::PointerUp, 10_050);
    assert!(!controller.is_dragging());
}

#[test]
fn one_shot_tools_leave_the_controller_idle() {
    let mut controller = GestureController::new();
    let mut state = paint_state();
    state.tool = ToolKind::Fill;

    assert!(step(&mut controller, &mut state, down(4, 4), 10_000));
    assert!(!controller.is_dragging());
    assert_eq!(state.picture.color_at(0, 0).unwrap(), color("#000000"));
}

#[test]
fn shape_tools_draw_from_the_frozen_gesture_state() {
    let mut controller = GestureController::new();
    let mut state = paint_state();
    state.tool = ToolKind::Line;

    step(&mut controller, &mut state, down(0, 0), 10_000);
    // The color changes mid-gesture; the session snapshot keeps drawing black
    state = state.apply(StateUpdate::set_color(color("#ff0000")), 10_020);
    step(&mut controller, &mut state, drag_to(3, 0), 10_040);

    for x in 0..=3 {
        assert_eq!(state.picture.color_at(x, 0).unwrap(), color("#000000"));
    }
}

#[test]
fn device_positions_floor_and_clamp() {
    let origin = Pos2::new(100.0, 50.0);
    assert_eq!(to_grid(Pos2::new(100.0, 50.0), origin), Position::new(0, 0));
    assert_eq!(to_grid(Pos2::new(129.9, 50.0), origin), Position::new(2, 0));
    assert_eq!(to_grid(Pos2::new(130.0, 74.0), origin), Position::new(3, 2));
    // Left/above the canvas clamps to zero rather than going negative
    assert_eq!(to_grid(Pos2::new(40.0, 10.0), origin), Position::new(0, 0));
}

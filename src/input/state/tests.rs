use super::*;
use crate::config::{Action, KeybindingsConfig};
use crate::draw::Shape;
use crate::draw::color::{BLACK, BLUE, RED, WHITE};
use crate::input::{Key, MouseButton, Selection, Tool};
use crate::util::{DragBox, Point};

fn create_test_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();

    InputState::with_defaults(
        Selection::default(), // pencil, black, solid
        WHITE,                // background
        true,                 // show_status_bar
        action_map,
    )
}

fn drag(state: &mut InputState, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    state.on_pointer_down(first.0, first.1);
    for &(x, y) in rest {
        state.on_pointer_move(x, y);
    }
    let last = points.last().unwrap();
    state.on_pointer_up(last.0, last.1);
}

fn press_with_ctrl(state: &mut InputState, key: char) {
    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char(key));
    state.on_key_release(Key::Char(key));
    state.on_key_release(Key::Ctrl);
}

#[test]
fn test_initial_state_is_idle_pencil_black_solid() {
    let state = create_test_input_state();
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.canvas.is_empty());
    assert!(state.in_progress_shape().is_none());
    assert_eq!(
        state.describe_state().to_string(),
        "Tool: Pencil | Color: Black | Mode: Solid"
    );
}

#[test]
fn test_pointer_down_enters_drawing_with_selected_style() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Line);
    state.select_color(RED);
    state.select_dash(true);

    state.on_pointer_down(5, 6);
    assert_eq!(
        state.state,
        DrawingState::Drawing {
            tool: Tool::Line,
            start: Point::new(5, 6)
        }
    );
    let shape = state.in_progress_shape().expect("shape in progress");
    let style = shape.style().expect("line has a style");
    assert_eq!(style.color, RED);
    assert!(style.dashed);
}

#[test]
fn test_each_gesture_commits_one_shape() {
    let mut state = create_test_input_state();
    for tool in [Tool::Line, Tool::Rectangle, Tool::Oval, Tool::Pencil] {
        state.select_tool(tool);
        drag(&mut state, &[(0, 0), (10, 10)]);
    }
    assert_eq!(state.canvas.len(), 4);
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.in_progress_shape().is_none());
}

#[test]
fn test_pencil_records_every_move() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(10, 10), (20, 10), (20, 20)]);

    assert_eq!(state.canvas.len(), 1);
    let Shape::Freehand { points, .. } = &state.canvas.shapes()[0] else {
        panic!("expected a freehand path");
    };
    assert_eq!(
        points,
        &vec![Point::new(10, 10), Point::new(20, 10), Point::new(20, 20)]
    );
}

#[test]
fn test_rectangle_normalizes_reverse_drag() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Rectangle);
    state.on_pointer_down(50, 50);
    state.on_pointer_move(10, 30);
    state.on_pointer_up(10, 30);

    let Shape::Rect { bounds, .. } = &state.canvas.shapes()[0] else {
        panic!("expected a rectangle");
    };
    assert_eq!(
        (bounds.x, bounds.y, bounds.width, bounds.height),
        (10, 30, 40, 20)
    );
}

#[test]
fn test_box_corner_keeps_smallest_coordinate_across_moves() {
    for tool in [Tool::Rectangle, Tool::Oval] {
        let mut state = create_test_input_state();
        state.select_tool(tool);
        drag(&mut state, &[(10, 10), (0, 0), (30, 30)]);

        let (Shape::Rect { bounds, .. } | Shape::Oval { bounds, .. }) = &state.canvas.shapes()[0]
        else {
            panic!("expected a box shape for {tool}");
        };
        assert_eq!(
            (bounds.x, bounds.y, bounds.width, bounds.height),
            (0, 0, 30, 30),
            "{tool}"
        );
    }
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 16, 16).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();

    for tool in Tool::ALL {
        let mut state = create_test_input_state();
        state.select_tool(tool);
        state.on_pointer_down(i32::MAX, 0);
        state.on_pointer_move(i32::MIN, i32::MIN);
        state.on_pointer_move(i32::MAX, i32::MAX);
        state.on_pointer_up(i32::MAX, i32::MAX);
        state.render(&ctx);
        assert!(!state.is_drawing(), "{tool}");
    }

    let mut state = create_test_input_state();
    state.select_tool(Tool::Rectangle);
    drag(&mut state, &[(i32::MAX, 0), (i32::MIN, i32::MIN), (i32::MAX, i32::MAX)]);
    let Shape::Rect { bounds, .. } = &state.canvas.shapes()[0] else {
        panic!("expected a rectangle");
    };
    assert_eq!(
        (bounds.x, bounds.y, bounds.width, bounds.height),
        (i32::MIN, i32::MIN, i32::MAX, i32::MAX)
    );
}

#[test]
fn test_release_position_does_not_move_geometry() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Line);
    state.on_pointer_down(0, 0);
    state.on_pointer_move(30, 0);
    state.on_pointer_up(99, 99);

    let Shape::Line { end, .. } = &state.canvas.shapes()[0] else {
        panic!("expected a line");
    };
    assert_eq!(*end, Point::new(30, 0));
}

#[test]
fn test_zero_movement_gesture_commits_degenerate_shape() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Oval);
    state.on_pointer_down(40, 40);
    state.on_pointer_up(40, 40);

    assert_eq!(state.canvas.len(), 1);
    let Shape::Oval { bounds, .. } = &state.canvas.shapes()[0] else {
        panic!("expected an oval");
    };
    assert_eq!(*bounds, DragBox::new(Point::new(40, 40)));
}

#[test]
fn test_eraser_commits_one_mark_per_move() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    state.on_pointer_down(0, 0);
    state.on_pointer_move(5, 0);
    state.on_pointer_move(10, 0);
    state.on_pointer_move(15, 0);
    state.on_pointer_up(15, 0);

    assert_eq!(state.canvas.len(), 3);
    let positions: Vec<_> = state
        .canvas
        .shapes()
        .iter()
        .map(|shape| match shape {
            Shape::EraserMark { at, fill } => {
                assert_eq!(*fill, WHITE);
                *at
            }
            other => panic!("expected eraser marks, got {other:?}"),
        })
        .collect();
    assert_eq!(
        positions,
        vec![Point::new(5, 0), Point::new(10, 0), Point::new(15, 0)]
    );
}

#[test]
fn test_trailing_eraser_mark_lingers_after_release() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    drag(&mut state, &[(0, 0), (5, 0)]);

    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.canvas.len(), 1);
    assert_eq!(
        state.in_progress_shape(),
        Some(&Shape::EraserMark {
            at: Point::new(5, 0),
            fill: WHITE
        })
    );

    // Moves after the release do not touch it
    state.on_pointer_move(50, 50);
    assert_eq!(state.canvas.len(), 1);

    // The next gesture replaces it
    state.select_tool(Tool::Line);
    state.on_pointer_down(1, 1);
    assert_eq!(state.in_progress_shape().map(Shape::tool), Some(Tool::Line));
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_eraser_without_moves_commits_nothing() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    state.on_pointer_down(3, 3);
    state.on_pointer_up(3, 3);
    assert!(state.canvas.is_empty());
}

#[test]
fn test_eraser_branch_follows_shape_not_selected_tool() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Eraser);
    state.on_pointer_down(0, 0);
    state.select_tool(Tool::Pencil);
    state.on_pointer_move(5, 5);
    state.on_pointer_move(6, 6);

    assert_eq!(state.canvas.len(), 2);
    assert!(state.canvas.shapes().iter().all(Shape::is_eraser));
}

#[test]
fn test_selection_change_mid_drag_affects_next_shape_only() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Line);
    state.on_pointer_down(0, 0);
    state.select_color(BLUE);
    state.select_dash(true);
    state.select_tool(Tool::Rectangle);
    state.on_pointer_move(10, 10);
    state.on_pointer_up(10, 10);

    let first = &state.canvas.shapes()[0];
    assert_eq!(first.tool(), Tool::Line);
    assert_eq!(first.style().unwrap().color, BLACK);
    assert!(!first.style().unwrap().dashed);

    drag(&mut state, &[(0, 0), (5, 5)]);
    let second = &state.canvas.shapes()[1];
    assert_eq!(second.tool(), Tool::Rectangle);
    assert_eq!(second.style().unwrap().color, BLUE);
    assert!(second.style().unwrap().dashed);
}

#[test]
fn test_move_and_up_while_idle_are_noops() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;
    state.on_pointer_move(10, 10);
    state.on_pointer_up(10, 10);

    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.canvas.is_empty());
    assert!(!state.needs_redraw);
}

#[test]
fn test_pointer_down_while_drawing_restarts_gesture() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Line);
    state.on_pointer_down(0, 0);
    state.on_pointer_move(10, 10);
    state.on_pointer_down(20, 20);
    state.on_pointer_up(20, 20);

    assert_eq!(state.canvas.len(), 1);
    let Shape::Line { start, .. } = &state.canvas.shapes()[0] else {
        panic!("expected a line");
    };
    assert_eq!(*start, Point::new(20, 20));
}

#[test]
fn test_undo_and_clear_count_arithmetic() {
    let mut state = create_test_input_state();
    for offset in 0..3 {
        drag(&mut state, &[(offset, 0), (offset, 10)]);
    }
    state.undo();
    assert_eq!(state.canvas.len(), 2);

    state.clear();
    assert_eq!(state.canvas.len(), 0);
    state.undo();
    assert_eq!(state.canvas.len(), 0);
}

#[test]
fn test_clear_while_drawing_keeps_gesture() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0, 0), (5, 5)]);
    state.on_pointer_down(10, 10);
    state.clear();
    state.undo();
    state.on_pointer_move(20, 20);
    state.on_pointer_up(20, 20);

    assert_eq!(state.canvas.len(), 1);
    assert_eq!(state.canvas.shapes()[0].tool(), Tool::Pencil);
}

#[test]
fn test_describe_state_is_pure() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;
    let before = state.describe_state();
    let again = state.describe_state();
    assert_eq!(before, again);
    assert!(!state.needs_redraw);
}

#[test]
fn test_ctrl_z_undoes() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0, 0), (5, 5)]);
    drag(&mut state, &[(0, 0), (6, 6)]);

    press_with_ctrl(&mut state, 'z');
    assert_eq!(state.canvas.len(), 1);
    assert!(!state.modifiers.ctrl);
}

#[test]
fn test_plain_z_without_ctrl_does_nothing() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0, 0), (5, 5)]);
    state.on_key_press(Key::Char('z'));
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_ctrl_x_clears() {
    let mut state = create_test_input_state();
    drag(&mut state, &[(0, 0), (5, 5)]);
    press_with_ctrl(&mut state, 'x');
    assert!(state.canvas.is_empty());
}

#[test]
fn test_tool_color_and_mode_keys() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Char('r'));
    assert_eq!(state.selection.tool, Tool::Rectangle);
    state.on_key_press(Key::Char('E'));
    assert_eq!(state.selection.tool, Tool::Eraser);
    state.on_key_press(Key::Char('2'));
    assert_eq!(state.selection.color, RED);
    state.on_key_press(Key::Char('d'));
    assert!(state.selection.dashed);
    state.on_key_press(Key::Char('s'));
    assert!(!state.selection.dashed);

    assert_eq!(
        state.describe_state().to_string(),
        "Tool: Eraser | Color: Red | Mode: Solid"
    );
}

#[test]
fn test_escape_cancels_drawing_then_exits() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0, 0);
    state.on_pointer_move(5, 5);

    state.on_key_press(Key::Escape);
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.in_progress_shape().is_none());
    assert!(state.canvas.is_empty());
    assert!(!state.should_exit);

    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn test_ctrl_q_exits() {
    let mut state = create_test_input_state();
    press_with_ctrl(&mut state, 'q');
    assert!(state.should_exit);
}

#[test]
fn test_toggle_help_and_status_bar() {
    let mut state = create_test_input_state();
    assert!(!state.show_help);
    state.on_key_press(Key::F10);
    assert!(state.show_help);
    state.handle_action(Action::ToggleHelp);
    assert!(!state.show_help);

    assert!(state.show_status_bar);
    state.on_key_press(Key::F12);
    assert!(!state.show_status_bar);
}

#[test]
fn test_other_mouse_buttons_do_not_draw() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 0, 0);
    state.on_mouse_motion(5, 5);
    state.on_mouse_release(MouseButton::Right, 5, 5);
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.canvas.is_empty());

    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(5, 5);
    state.on_mouse_release(MouseButton::Middle, 5, 5);
    assert!(state.is_drawing());
    state.on_mouse_release(MouseButton::Left, 5, 5);
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_render_clears_redraw_flag_and_draws_preview() {
    let mut state = create_test_input_state();
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 40).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();

    state.on_pointer_down(0, 0);
    assert!(state.needs_redraw);
    state.render(&ctx);
    assert!(!state.needs_redraw);
    assert!(state.in_progress_shape().is_some());

    state.on_key_press(Key::Escape);
    assert!(state.in_progress_shape().is_none());
    assert!(state.needs_redraw);
}

#[test]
fn test_from_config_applies_drawing_defaults() {
    let config = crate::config::Config::parse(
        r#"
        [drawing]
        default_tool = "rectangle"
        default_color = [255, 175, 175]
        default_dashed = true

        [canvas]
        width = 320
        height = 240
        "#,
    )
    .unwrap();
    let state = InputState::from_config(&config).unwrap();
    assert_eq!(
        state.describe_state().to_string(),
        "Tool: Rectangle | Color: Pink | Mode: Dotted"
    );
    assert_eq!((state.screen_width, state.screen_height), (320, 240));
}

#[test]
fn test_from_config_rejects_duplicate_bindings() {
    let config = crate::config::Config::parse(
        r#"
        [keybindings]
        undo = ["Ctrl+Z"]
        clear_canvas = ["Ctrl+Z"]
        "#,
    )
    .unwrap();
    let err = InputState::from_config(&config).err().expect("duplicate binding");
    assert!(err.to_string().contains("Duplicate keybinding"));
}

use crate::app::state::PointerMode;
use crate::app::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{Block, Entity, RatioSpan, Segment, Sewing};
use glam::Vec2;

use super::map_intent_to_commands;

/// Quadrat 10×10 (geschlossen) mit einem Sewing auf der Unterkante.
fn state_with_square() -> AppState {
    let mut block = Block::with_entities(
        1,
        "Quadrat",
        [
            Entity::from(Segment {
                id: 1,
                kind: "edge".into(),
                vertexes: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(10.0, 0.0),
                    Vec2::new(10.0, 10.0),
                    Vec2::new(0.0, 10.0),
                    Vec2::new(0.0, 0.0),
                ],
            }),
            Entity::from(Sewing {
                id: 2,
                kind: "seam".into(),
                vertexes: Vec::new(),
                segment_id: 1,
                ratio: RatioSpan::new(0.0, 0.25),
            }),
        ],
    );
    block.rebuild_sewings();

    let mut state = AppState::new();
    state.blocks = vec![block];
    state
}

#[test]
fn save_requested_without_path_maps_to_save_file() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested { path: None });

    assert_eq!(commands, vec![AppCommand::SaveFile { path: None }]);
}

#[test]
fn reset_requested_resets_blocks_then_camera() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);

    assert_eq!(commands, vec![AppCommand::ResetBlocks, AppCommand::ResetCamera]);
}

#[test]
fn zoom_keys_map_to_zoom_commands() {
    let state = AppState::new();
    let map = |key| map_intent_to_commands(&state, AppIntent::KeyPressed { key });

    assert_eq!(map('+'), vec![AppCommand::ZoomIn]);
    assert_eq!(map('='), vec![AppCommand::ZoomIn]);
    assert_eq!(map('-'), vec![AppCommand::ZoomOut]);
    assert_eq!(map('_'), vec![AppCommand::ZoomOut]);
    assert_eq!(map('0'), vec![AppCommand::ResetCamera]);
    assert!(map('x').is_empty());
}

#[test]
fn wheel_down_zooms_out_towards_cursor() {
    let state = AppState::new();
    let screen_pos = Vec2::new(30.0, 40.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::Wheel {
            screen_pos,
            delta_y: 120.0,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ZoomTowards {
            factor: 0.9,
            focus_screen: screen_pos
        }]
    );
    let idle = map_intent_to_commands(
        &state,
        AppIntent::Wheel {
            screen_pos,
            delta_y: 0.0,
        },
    );
    assert!(idle.is_empty());
}

#[test]
fn middle_button_starts_pan() {
    let state = state_with_square();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(5.0, 0.0),
            button: PointerButton::Middle,
        },
    );

    assert!(matches!(commands[0], AppCommand::BeginPan { .. }));
}

#[test]
fn press_on_sewing_starts_sewing_drag() {
    let state = state_with_square();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(5.0, 0.5),
            button: PointerButton::Primary,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::BeginSewingDrag {
            block_id: 1,
            sewing_id: 2,
            ..
        }
    ));
}

#[test]
fn press_inside_block_starts_block_drag() {
    let state = state_with_square();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(5.0, 5.0),
            button: PointerButton::Primary,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::BeginBlockDrag { block_id: 1, .. }
    ));
}

#[test]
fn press_on_empty_space_does_nothing() {
    let state = state_with_square();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(50.0, 50.0),
            button: PointerButton::Primary,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_move_follows_active_gesture() {
    let mut state = state_with_square();
    let screen_pos = Vec2::new(3.0, 4.0);

    let hover = map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos });
    assert!(matches!(hover[0], AppCommand::UpdateHover { .. }));

    state.interaction.pointer = PointerMode::Panning {
        last_screen: Vec2::ZERO,
    };
    let pan = map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos });
    assert_eq!(pan, vec![AppCommand::PanTo { screen_pos }]);

    state.interaction.pointer = PointerMode::BlockDrag {
        block_id: 1,
        last_world: Vec2::ZERO,
    };
    let drag = map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos });
    assert!(matches!(drag[0], AppCommand::DragBlockTo { .. }));
}

#[test]
fn click_selects_by_priority_and_clears_on_empty_space() {
    let state = state_with_square();
    let click = |x: f32, y: f32, shift| {
        map_intent_to_commands(
            &state,
            AppIntent::Clicked {
                screen_pos: Vec2::new(x, y),
                shift,
            },
        )
    };

    assert_eq!(
        click(10.0, 5.0, false),
        vec![AppCommand::SelectEntity {
            block_id: 1,
            entity_id: 1,
            toggle: false
        }]
    );
    assert_eq!(
        click(5.0, 5.0, true),
        vec![AppCommand::SelectBlock {
            block_id: 1,
            toggle: true
        }]
    );
    assert_eq!(click(50.0, 50.0, false), vec![AppCommand::ClearSelection]);
    assert!(click(50.0, 50.0, true).is_empty());
}

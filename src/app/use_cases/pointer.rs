//! Use-Cases für Zeiger-Gesten: Pan, Block-Drag und Sewing-Drag.

use crate::app::state::PointerMode;
use crate::app::AppState;
use crate::core::{BlockId, EntityId};
use crate::shared::CursorHint;
use glam::Vec2;

/// Beginnt eine Pan-Geste an der Screen-Position.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    state.interaction.reset();
    state.interaction.pointer = PointerMode::Panning {
        last_screen: screen_pos,
    };
    state.view.cursor = CursorHint::Panning;
}

/// Verschiebt die Ansicht um die Bewegung seit dem letzten Event.
pub fn pan_to(state: &mut AppState, screen_pos: Vec2) {
    let PointerMode::Panning { last_screen } = state.interaction.pointer else {
        return;
    };
    super::camera::pan(state, screen_pos - last_screen);
    state.interaction.pointer = PointerMode::Panning {
        last_screen: screen_pos,
    };
    state.view.cursor = CursorHint::Panning;
}

/// Beginnt das Ziehen eines ganzen Blocks.
pub fn begin_block_drag(state: &mut AppState, block_id: BlockId, world_pos: Vec2) {
    if state.block(block_id).is_none() {
        return;
    }
    state.interaction.reset();
    state.interaction.pointer = PointerMode::BlockDrag {
        block_id,
        last_world: world_pos,
    };
    state.view.cursor = CursorHint::Grabbing;
    log::debug!("Block-Drag gestartet: Block {}", block_id);
}

/// Verschiebt den gezogenen Block starr; Sewing-Ratios bleiben unverändert.
pub fn drag_block_to(state: &mut AppState, world_pos: Vec2) {
    let PointerMode::BlockDrag {
        block_id,
        last_world,
    } = state.interaction.pointer
    else {
        return;
    };
    let delta = world_pos - last_world;
    if !delta.is_finite() {
        return;
    }
    if let Some(block) = state.block_mut(block_id) {
        block.translate(delta);
    }
    state.interaction.pointer = PointerMode::BlockDrag {
        block_id,
        last_world: world_pos,
    };
    state.view.cursor = CursorHint::Grabbing;
}

/// Beginnt das Ziehen eines Sewings entlang seines Eltern-Segments.
pub fn begin_sewing_drag(
    state: &mut AppState,
    block_id: BlockId,
    sewing_id: EntityId,
    world_pos: Vec2,
) {
    state.interaction.reset();
    let hysteresis = state.options.seam_hysteresis();
    let Some(block) = state.blocks.iter().find(|b| b.id == block_id) else {
        return;
    };
    if state
        .interaction
        .sewing_drag
        .begin(world_pos, block, sewing_id, hysteresis)
    {
        state.view.cursor = CursorHint::Grabbing;
    } else {
        log::warn!(
            "Sewing {} in Block {} ist nicht ziehbar (kein Eltern-Segment)",
            sewing_id,
            block_id
        );
    }
}

/// Legt das gezogene Sewing unter den Cursor.
pub fn drag_sewing_to(state: &mut AppState, world_pos: Vec2) {
    if state.interaction.sewing_drag.update(world_pos, &mut state.blocks) {
        state.view.cursor = CursorHint::Grabbing;
    }
}

/// Beendet jede laufende Geste und setzt Anker und Naht-Zustand zurück.
pub fn end_interaction(state: &mut AppState) {
    state.interaction.reset();
    state.view.cursor = CursorHint::Default;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Block, Entity, RatioSpan, Segment, Sewing};
    use approx::assert_relative_eq;

    fn state_with_line() -> AppState {
        let mut block = Block::with_entities(
            7,
            "Linie",
            [
                Entity::from(Segment {
                    id: 1,
                    kind: String::new(),
                    vertexes: vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
                }),
                Entity::from(Sewing {
                    id: 2,
                    kind: String::new(),
                    vertexes: Vec::new(),
                    segment_id: 1,
                    ratio: RatioSpan::new(0.2, 0.4),
                }),
            ],
        );
        block.rebuild_sewings();
        let mut state = AppState::new();
        state.blocks = vec![block];
        state
    }

    #[test]
    fn pan_moves_camera_by_screen_delta() {
        let mut state = AppState::new();
        begin_pan(&mut state, Vec2::new(10.0, 10.0));
        pan_to(&mut state, Vec2::new(25.0, 5.0));
        pan_to(&mut state, Vec2::new(30.0, 5.0));

        assert_eq!(state.view.camera.pan, Vec2::new(20.0, -5.0));
        assert_eq!(state.view.cursor, CursorHint::Panning);

        end_interaction(&mut state);
        assert!(!state.interaction.is_active());
        assert_eq!(state.view.cursor, CursorHint::Default);
    }

    #[test]
    fn block_drag_translates_without_touching_ratios() {
        let mut state = state_with_line();
        begin_block_drag(&mut state, 7, Vec2::new(50.0, 0.0));
        drag_block_to(&mut state, Vec2::new(53.0, 4.0));

        let block = state.block(7).expect("Block erwartet");
        let sewing = block.sewing(2).expect("Sewing erwartet");
        assert_eq!(sewing.ratio, RatioSpan::new(0.2, 0.4));
        assert_eq!(sewing.vertexes[0], Vec2::new(23.0, 4.0));
        assert_eq!(
            block.segment(1).expect("Segment erwartet").vertexes[0],
            Vec2::new(3.0, 4.0)
        );
    }

    #[test]
    fn sewing_drag_keeps_grab_point_under_cursor() {
        let mut state = state_with_line();
        // Greifpunkt in der Mitte des Sewings (x = 30)
        begin_sewing_drag(&mut state, 7, 2, Vec2::new(30.0, 0.0));
        assert!(state.interaction.sewing_drag.is_active());

        drag_sewing_to(&mut state, Vec2::new(60.0, 2.0));

        let sewing = state
            .block(7)
            .and_then(|b| b.sewing(2))
            .expect("Sewing erwartet");
        assert_relative_eq!(sewing.ratio.start, 0.5, epsilon = 1e-5);
        assert_relative_eq!(sewing.ratio.end, 0.7, epsilon = 1e-5);

        end_interaction(&mut state);
        assert!(!state.interaction.sewing_drag.is_active());
    }

    #[test]
    fn unknown_sewing_does_not_start_drag() {
        let mut state = state_with_line();
        begin_sewing_drag(&mut state, 7, 99, Vec2::ZERO);
        assert!(!state.interaction.is_active());
    }
}

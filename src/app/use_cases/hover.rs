//! Use-Case: Hover-Erkennung und Cursor-Hinweis.

use crate::app::AppState;
use crate::core::{hit_test, Hit};
use crate::shared::CursorHint;
use glam::Vec2;

/// Aktualisiert Hover-Zustand und Cursor für eine Welt-Position.
///
/// Entity-Treffer (Sewing vor Segment) löschen den Block-Hover; sonst wird
/// der erste Block gehovert, dessen Umriss den Punkt enthält.
pub fn update_hover(state: &mut AppState, world_pos: Vec2) {
    let hit = hit_test(
        world_pos,
        &state.blocks,
        state.view.camera.zoom,
        &state.options.hit_threshold(),
    );

    match hit {
        Hit::Sewing { block, entity } | Hit::Segment { block, entity } => {
            state.hover.set_entity(Some((block, entity)));
        }
        Hit::Block { block } => {
            state.hover.set_entity(None);
            state.hover.set_block(Some(block));
        }
        Hit::None => state.hover.clear(),
    }

    state.view.cursor = if hit.is_none() {
        CursorHint::Default
    } else {
        CursorHint::Grab
    };
}

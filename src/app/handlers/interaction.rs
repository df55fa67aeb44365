//! Handler für Zeiger-Gesten und Hover.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{BlockId, EntityId};
use glam::Vec2;

pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    use_cases::pointer::begin_pan(state, screen_pos);
}

pub fn pan_to(state: &mut AppState, screen_pos: Vec2) {
    use_cases::pointer::pan_to(state, screen_pos);
}

pub fn begin_block_drag(state: &mut AppState, block_id: BlockId, world_pos: Vec2) {
    use_cases::pointer::begin_block_drag(state, block_id, world_pos);
}

pub fn drag_block_to(state: &mut AppState, world_pos: Vec2) {
    use_cases::pointer::drag_block_to(state, world_pos);
}

pub fn begin_sewing_drag(
    state: &mut AppState,
    block_id: BlockId,
    sewing_id: EntityId,
    world_pos: Vec2,
) {
    use_cases::pointer::begin_sewing_drag(state, block_id, sewing_id, world_pos);
}

pub fn drag_sewing_to(state: &mut AppState, world_pos: Vec2) {
    use_cases::pointer::drag_sewing_to(state, world_pos);
}

/// Aktualisiert Hover und Cursor (nur ohne laufende Geste).
pub fn update_hover(state: &mut AppState, world_pos: Vec2) {
    use_cases::hover::update_hover(state, world_pos);
}

/// Beendet die laufende Geste (Pointer-Up).
pub fn end(state: &mut AppState) {
    use_cases::pointer::end_interaction(state);
}

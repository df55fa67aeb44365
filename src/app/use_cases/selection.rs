//! Use-Case-Funktionen für die Klick-Selektion.

use crate::app::AppState;
use crate::core::{BlockId, EntityId};

/// Selektiert eine Entity; mit `toggle` (Shift) wird sie umgeschaltet.
pub fn select_entity(state: &mut AppState, block_id: BlockId, entity_id: EntityId, toggle: bool) {
    if state.entity(block_id, entity_id).is_none() {
        log::debug!("Selektion ignoriert: Entity {}/{} unbekannt", block_id, entity_id);
        return;
    }
    if toggle {
        state.selection.toggle_entity(block_id, entity_id);
    } else {
        state.selection.select_entity(block_id, entity_id);
    }
}

/// Selektiert einen Block; mit `toggle` (Shift) wird er umgeschaltet.
pub fn select_block(state: &mut AppState, block_id: BlockId, toggle: bool) {
    if state.block(block_id).is_none() {
        log::debug!("Selektion ignoriert: Block {} unbekannt", block_id);
        return;
    }
    if toggle {
        state.selection.toggle_block(block_id);
    } else {
        state.selection.select_block(block_id);
    }
}

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

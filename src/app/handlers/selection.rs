//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{BlockId, EntityId};

/// Selektiert eine Entity (Shift = umschalten).
pub fn select_entity(state: &mut AppState, block_id: BlockId, entity_id: EntityId, toggle: bool) {
    use_cases::selection::select_entity(state, block_id, entity_id, toggle);
}

/// Selektiert einen Block (Shift = umschalten).
pub fn select_block(state: &mut AppState, block_id: BlockId, toggle: bool) {
    use_cases::selection::select_block(state, block_id, toggle);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

//! Handler für Generierung, Reset und Rebuild der Blöcke.

use crate::app::use_cases;
use crate::app::AppState;

/// Erzeugt Testblöcke aus den geladenen Vorlagen.
pub fn generate(state: &mut AppState, count: usize, gap: f32, seed: Option<u64>) {
    use_cases::document::generate(state, count, gap, seed);
}

/// Setzt die Blöcke auf das geladene Dokument zurück.
pub fn reset(state: &mut AppState) {
    use_cases::document::reset_blocks(state);
}

/// Baut alle Sewings neu auf.
pub fn rebuild(state: &mut AppState) {
    use_cases::document::rebuild_sewings(state);
}

//! Use-Cases auf der Block-Sammlung: Generierung, Reset, Rebuild.

use crate::app::AppState;
use crate::core::{generate_blocks_in_rows, rebuild_all_ratios, RebuildReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Erzeugt `count` Testblöcke aus den geladenen Vorlagen.
///
/// Ungültige Parameter oder fehlende Vorlagen lassen den State unverändert
/// und liefern `false`. Bei Erfolg wird auch die Kamera zurückgesetzt.
pub fn generate(state: &mut AppState, count: usize, gap: f32, seed: Option<u64>) -> bool {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let Some(mut blocks) = generate_blocks_in_rows(
        &state.source_blocks,
        count,
        gap,
        state.options.generation_blocks_per_row,
        &mut rng,
    ) else {
        log::warn!(
            "Generierung abgelehnt: {} Blöcke, Abstand {}, {} Vorlage(n)",
            count,
            gap,
            state.source_blocks.len()
        );
        return false;
    };

    rebuild_all_ratios(&mut blocks);
    state.replace_blocks(blocks);
    super::camera::reset_camera(state);
    true
}

/// Setzt die Blöcke auf das zuletzt geladene Dokument zurück.
pub fn reset_blocks(state: &mut AppState) {
    let mut blocks = state.source_blocks.clone();
    rebuild_all_ratios(&mut blocks);
    state.replace_blocks(blocks);
    log::info!("Blöcke zurückgesetzt ({} Blöcke)", state.blocks.len());
}

/// Baut alle Sewings aus ihren gespeicherten Ratios neu auf.
pub fn rebuild_sewings(state: &mut AppState) -> RebuildReport {
    let report = rebuild_all_ratios(&mut state.blocks);
    log::info!(
        "Sewings neu aufgebaut: {} ok, {} ohne Eltern, {} degeneriert",
        report.rebuilt,
        report.unresolved,
        report.degenerate
    );
    report
}

//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use anyhow::{bail, Context};
use std::path::PathBuf;

/// Lädt ein Block-Dokument von der Platte in den AppState.
pub fn load_file(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    load_document(state, &json)?;
    log::info!("Dokument geladen: {}", path.display());
    state.current_file_path = Some(path);
    Ok(())
}

/// Lädt ein Block-Dokument aus JSON-Text.
///
/// Die normalisierten Blöcke werden auch als Reset-Vorlage gemerkt.
/// Bei Fehler bleibt der State unverändert.
pub fn load_document(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    let (blocks, report) = crate::json::load_document(json)?;

    state.source_blocks = blocks.clone();
    state.replace_blocks(blocks);
    state.last_report = Some(report);
    super::camera::reset_camera(state);
    Ok(())
}

/// Speichert die aktuellen Blöcke (Ratio-Schema).
///
/// Ohne `path` wird unter dem zuletzt verwendeten Pfad gespeichert.
pub fn save_file(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.current_file_path.clone()) else {
        bail!("Kein Speicherpfad bekannt");
    };

    let json = crate::json::write_document(&state.blocks)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;

    log::info!(
        "Dokument gespeichert: {} ({} Blöcke)",
        path.display(),
        state.blocks.len()
    );
    state.current_file_path = Some(path);
    Ok(())
}

//! Handler für Datei-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Lädt ein Dokument von der Platte.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Lädt ein Dokument aus JSON-Text.
pub fn load_document(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    use_cases::file_io::load_document(state, json)
}

/// Speichert das Dokument unter dem angegebenen oder aktuellen Pfad.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}

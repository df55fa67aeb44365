use crate::app::CommandLog;
use crate::core::{Block, BlockId, Entity, EntityId};
use crate::json::LoadReport;
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::{HoverState, InteractionState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell bearbeitete Blöcke
    pub blocks: Vec<Block>,
    /// Normalisierte Blöcke des zuletzt geladenen Dokuments (Reset- und Generierungs-Vorlage)
    pub source_blocks: Vec<Block>,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<PathBuf>,
    /// Diagnose des letzten Ladevorgangs
    pub last_report: Option<LoadReport>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Hover-State
    pub hover: HoverState,
    /// Laufende Zeiger-Geste
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            blocks: Vec::new(),
            source_blocks: Vec::new(),
            current_file_path: None,
            last_report: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            hover: HoverState::default(),
            interaction: InteractionState::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Anzahl der Blöcke (für UI-Anzeige)
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Anzahl aller Entities über alle Blöcke
    pub fn entity_count(&self) -> usize {
        self.blocks.iter().map(|b| b.entities.len()).sum()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn entity(&self, block_id: BlockId, entity_id: EntityId) -> Option<&Entity> {
        self.block(block_id)?.entities.get(&entity_id)
    }

    /// Ersetzt alle Blöcke und verwirft Selektion, Hover und laufende Gesten.
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        self.selection.clear();
        self.hover.clear();
        self.interaction.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

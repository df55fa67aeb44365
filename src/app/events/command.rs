use crate::core::{BlockId, EntityId};
use glam::Vec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Dokument ===
    /// Dokument aus Datei laden
    LoadFile { path: PathBuf },
    /// Dokument aus JSON-Text laden
    LoadDocument { json: String },
    /// Dokument speichern
    SaveFile { path: Option<PathBuf> },
    /// Testblöcke erzeugen
    GenerateBlocks {
        count: usize,
        gap: f32,
        seed: Option<u64>,
    },
    /// Blöcke auf die geladene Vorlage zurücksetzen
    ResetBlocks,
    /// Sewings aus Ratios neu aufbauen
    RebuildSewings,

    // === Kamera & Viewport ===
    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoom um Faktor, Welt-Punkt unter `focus_screen` bleibt fest
    ZoomTowards { factor: f32, focus_screen: Vec2 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // === Zeiger-Gesten ===
    /// Pan-Geste beginnen
    BeginPan { screen_pos: Vec2 },
    /// Pan-Geste fortsetzen
    PanTo { screen_pos: Vec2 },
    /// Block-Drag beginnen
    BeginBlockDrag { block_id: BlockId, world_pos: Vec2 },
    /// Gezogenen Block nachführen
    DragBlockTo { world_pos: Vec2 },
    /// Sewing-Drag beginnen
    BeginSewingDrag {
        block_id: BlockId,
        sewing_id: EntityId,
        world_pos: Vec2,
    },
    /// Gezogenes Sewing nachführen
    DragSewingTo { world_pos: Vec2 },
    /// Hover und Cursor für eine Welt-Position aktualisieren
    UpdateHover { world_pos: Vec2 },
    /// Laufende Geste beenden
    EndInteraction,

    // === Selektion ===
    /// Entity selektieren (`toggle` = Shift)
    SelectEntity {
        block_id: BlockId,
        entity_id: EntityId,
        toggle: bool,
    },
    /// Block selektieren (`toggle` = Shift)
    SelectBlock { block_id: BlockId, toggle: bool },
    /// Selektion aufheben
    ClearSelection,
}

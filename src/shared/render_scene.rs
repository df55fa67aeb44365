//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Beschreibt nur, was ein Painter zeichnen würde; gezeichnet wird hier nichts.

use glam::Vec2;

use crate::core::{BlockId, Camera2D, Direction, EntityId, Layer};

/// Cursor-Form, die der Host anzeigen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Etwas Ziehbares unter dem Cursor
    Grab,
    /// Drag läuft
    Grabbing,
    /// Ansicht wird verschoben
    Panning,
}

/// Eine Entity als Linienzug.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolyline {
    pub block_id: BlockId,
    pub entity_id: EntityId,
    pub layer: Layer,
    pub vertexes: Vec<Vec2>,
    pub selected: bool,
    pub hovered: bool,
}

/// Gefüllter Block-Umriss (nur für hervorgehobene Blöcke).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlockFill {
    pub block_id: BlockId,
    pub polygon: Vec<Vec2>,
    pub selected: bool,
    pub hovered: bool,
}

/// Richtungspfeil auf einem Sewing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneArrow {
    pub block_id: BlockId,
    pub entity_id: EntityId,
    /// Pfeilspitze (Welt)
    pub position: Vec2,
    /// Normierte Laufrichtung des Sewings an dieser Stelle
    pub tangent: Vec2,
    /// Lauf relativ zum geschlossenen Eltern-Segment
    pub direction: Direction,
}

/// Beschriftung einer Entity am Schwerpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub block_id: BlockId,
    pub entity_id: EntityId,
    pub position: Vec2,
    pub text: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Flächen hervorgehobener Blöcke (werden zuerst gezeichnet)
    pub block_fills: Vec<SceneBlockFill>,
    /// Segmente und Sewings in Block-/Entity-Reihenfolge
    pub polylines: Vec<ScenePolyline>,
    pub arrows: Vec<SceneArrow>,
    pub labels: Vec<SceneLabel>,
    pub cursor: CursorHint,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        !self.polylines.is_empty()
    }

    /// Linienzüge einer Ebene.
    pub fn polylines_on(&self, layer: Layer) -> impl Iterator<Item = &ScenePolyline> {
        self.polylines.iter().filter(move |p| p.layer == layer)
    }
}

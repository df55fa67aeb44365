//! Wire-Typen des JSON-Dokuments (`{ blocks: [...] }`).
//!
//! Spiegeln das Dokument feldgenau; die Umwandlung in das Core-Modell
//! passiert ausschließlich in [`super::parser::normalize`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punkt im Dokument (`{x, y}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: f32,
    pub y: f32,
}

impl From<RawPoint> for Vec2 {
    fn from(p: RawPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for RawPoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// `layer`-Feld einer Entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawLayer {
    Segment,
    Sewing,
}

/// Entity wie im Dokument. Alte Dokumente tragen `startOffset`/`endOffset`,
/// neue `startRatio`/`endRatio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub layer: RawLayer,
    #[serde(default)]
    pub vertexes: Vec<RawPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ratio: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ratio: Option<f32>,
}

/// Block wie im Dokument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entities: Vec<RawEntity>,
}

/// Wurzel des Dokuments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
}

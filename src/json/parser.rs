//! Parser und Normalisierung des Block-Dokuments.
//!
//! Einziger Umwandlungsschritt vom Dokument ins Core-Modell: alte
//! Offset-Felder werden einmalig in Ratios überführt, danach werden alle
//! Sewing-Vertexes aus ihrem Ratio neu aufgebaut.

use anyhow::{Context, Result};
use glam::Vec2;

use super::document::{RawBlock, RawDocument, RawEntity, RawLayer};
use crate::core::polyline::{arc_length, is_closed};
use crate::core::ratio::{ratio_span_from_offsets, RatioSpan};
use crate::core::{rebuild_all_ratios, Block, Entity, RebuildReport, Segment, Sewing};

/// Schema eines einzelnen Sewings im Eingabedokument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `startOffset`/`endOffset` (absolute Arc-Length)
    Legacy,
    /// `startRatio`/`endRatio`
    Ratio,
}

/// Diagnose einer Normalisierung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Anzahl Blöcke
    pub blocks: usize,
    /// Anzahl Segmente
    pub segments: usize,
    /// Anzahl Sewings
    pub sewings: usize,
    /// Sewings im alten Offset-Schema (einmalig konvertiert)
    pub legacy_sewings: usize,
    /// Sewings mit vorhandenen Ratios
    pub ratio_sewings: usize,
    /// Sewings, deren `segmentId` auf kein Segment des Blocks zeigt
    pub unresolved_parents: usize,
    /// Sewings ohne `segmentId` (verworfen)
    pub orphan_sewings: usize,
    /// Entities mit weniger als zwei Vertexes nach dem Rebuild
    pub degenerate_entities: usize,
    /// Ergebnis des Sewing-Rebuilds
    pub rebuild: RebuildReport,
}

impl LoadReport {
    /// Überwiegendes Schema des Dokuments (`None` ohne Sewings).
    pub fn schema(&self) -> Option<SchemaVersion> {
        if self.legacy_sewings == 0 && self.ratio_sewings == 0 {
            None
        } else if self.legacy_sewings > 0 {
            Some(SchemaVersion::Legacy)
        } else {
            Some(SchemaVersion::Ratio)
        }
    }
}

/// Liest ein Dokument aus einem JSON-String (ohne Normalisierung).
pub fn parse_document(json: &str) -> Result<RawDocument> {
    serde_json::from_str(json).context("Block-Dokument ist kein gültiges JSON")
}

/// Liest und normalisiert ein Dokument.
pub fn load_document(json: &str) -> Result<(Vec<Block>, LoadReport)> {
    let raw = parse_document(json)?;
    Ok(normalize(raw))
}

/// Schema eines Sewings: beide Ratio-Felder vorhanden → `Ratio`, sonst `Legacy`.
///
/// Segmente haben kein Schema (`None`).
pub fn detect_schema(entity: &RawEntity) -> Option<SchemaVersion> {
    match entity.layer {
        RawLayer::Segment => None,
        RawLayer::Sewing => match (entity.start_ratio, entity.end_ratio) {
            (Some(start), Some(end)) if start.is_finite() && end.is_finite() => {
                Some(SchemaVersion::Ratio)
            }
            _ => Some(SchemaVersion::Legacy),
        },
    }
}

/// Wandelt das Dokument in Core-Blöcke um und baut alle Sewings neu auf.
pub fn normalize(raw: RawDocument) -> (Vec<Block>, LoadReport) {
    let mut report = LoadReport::default();
    let mut blocks: Vec<Block> = raw
        .blocks
        .into_iter()
        .map(|b| normalize_block(b, &mut report))
        .collect();

    report.blocks = blocks.len();
    report.rebuild = rebuild_all_ratios(&mut blocks);
    report.degenerate_entities = blocks
        .iter()
        .flat_map(|b| b.entities.values())
        .filter(|e| !e.is_renderable())
        .count();

    log::info!(
        "Dokument normalisiert: {} Blöcke, {} Segmente, {} Sewings ({} alt, {} Ratio)",
        report.blocks,
        report.segments,
        report.sewings,
        report.legacy_sewings,
        report.ratio_sewings
    );
    if report.unresolved_parents > 0 || report.degenerate_entities > 0 {
        log::warn!(
            "{} Sewing(s) ohne Eltern-Segment, {} degenerierte Entity(s)",
            report.unresolved_parents,
            report.degenerate_entities
        );
    }

    (blocks, report)
}

fn normalize_block(raw: RawBlock, report: &mut LoadReport) -> Block {
    // Eltern-Länge und Geschlossenheit vorab, die Reihenfolge im Dokument ist beliebig
    let parent_shape = |segment_id: u64| -> Option<(f32, bool)> {
        raw.entities
            .iter()
            .find(|e| e.layer == RawLayer::Segment && e.id == segment_id)
            .map(|e| {
                let vertexes: Vec<Vec2> = e.vertexes.iter().copied().map(Vec2::from).collect();
                (arc_length(&vertexes), is_closed(&vertexes))
            })
    };

    let mut entities = Vec::with_capacity(raw.entities.len());
    for entity in &raw.entities {
        let vertexes: Vec<Vec2> = entity.vertexes.iter().copied().map(Vec2::from).collect();
        match entity.layer {
            RawLayer::Segment => {
                report.segments += 1;
                entities.push(Entity::from(Segment {
                    id: entity.id,
                    kind: entity.kind.clone(),
                    vertexes,
                }));
            }
            RawLayer::Sewing => {
                let Some(segment_id) = entity.segment_id else {
                    log::warn!(
                        "Block {}: Sewing {} ohne segmentId wird verworfen",
                        raw.id,
                        entity.id
                    );
                    report.orphan_sewings += 1;
                    continue;
                };
                report.sewings += 1;

                let shape = parent_shape(segment_id);
                if shape.is_none() {
                    report.unresolved_parents += 1;
                }

                let ratio = match detect_schema(entity) {
                    Some(SchemaVersion::Ratio) => {
                        report.ratio_sewings += 1;
                        RatioSpan::new(
                            entity.start_ratio.unwrap_or(0.0),
                            entity.end_ratio.unwrap_or(1.0),
                        )
                    }
                    _ => {
                        report.legacy_sewings += 1;
                        shape
                            .and_then(|(length, closed)| {
                                ratio_span_from_offsets(
                                    length,
                                    closed,
                                    entity.start_offset,
                                    entity.end_offset,
                                )
                            })
                            .unwrap_or(RatioSpan::new(0.0, 1.0))
                    }
                };

                entities.push(Entity::from(Sewing {
                    id: entity.id,
                    kind: entity.kind.clone(),
                    vertexes,
                    segment_id,
                    ratio,
                }));
            }
        }
    }

    Block::with_entities(raw.id, raw.name, entities)
}

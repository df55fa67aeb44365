//! Writer für das Block-Dokument.
//!
//! Sewings werden immer mit `startRatio`/`endRatio` geschrieben, nie mit Offsets.

use anyhow::{Context, Result};

use super::document::{RawBlock, RawDocument, RawEntity, RawLayer, RawPoint};
use crate::core::{Block, Entity};

/// Überführt Core-Blöcke in die Dokument-Struktur.
pub fn to_raw_document(blocks: &[Block]) -> RawDocument {
    RawDocument {
        blocks: blocks.iter().map(to_raw_block).collect(),
    }
}

fn to_raw_block(block: &Block) -> RawBlock {
    RawBlock {
        id: block.id,
        name: block.name.clone(),
        entities: block.entities.values().map(to_raw_entity).collect(),
    }
}

fn to_raw_entity(entity: &Entity) -> RawEntity {
    let vertexes = entity.vertexes().iter().copied().map(RawPoint::from).collect();
    let mut raw = RawEntity {
        id: entity.id(),
        kind: entity.kind().to_string(),
        layer: RawLayer::Segment,
        vertexes,
        segment_id: None,
        start_offset: None,
        end_offset: None,
        start_ratio: None,
        end_ratio: None,
    };
    if let Entity::Sewing(sewing) = entity {
        raw.layer = RawLayer::Sewing;
        raw.segment_id = Some(sewing.segment_id);
        raw.start_ratio = Some(sewing.ratio.start);
        raw.end_ratio = Some(sewing.ratio.end);
    }
    raw
}

/// Schreibt Blöcke als formatiertes JSON-Dokument.
pub fn write_document(blocks: &[Block]) -> Result<String> {
    serde_json::to_string_pretty(&to_raw_document(blocks))
        .context("Block-Dokument konnte nicht serialisiert werden")
}

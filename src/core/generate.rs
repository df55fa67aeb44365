//! Synthetische Block-Generierung (Raster aus zufälligen Vorlagen).

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;

use super::block::{Block, Bounds};
use super::entity::{Entity, EntityId};

/// Blöcke pro Zeile im Raster.
pub const BLOCKS_PER_ROW: usize = 10;
/// Standard-Abstand zwischen Blöcken (Welteinheiten).
pub const DEFAULT_GAP: f32 = 60.0;

/// Platzhalter-Eltern-ID für Vorlagen-Sewings ohne auflösbares Segment (IDs beginnen bei 1).
const UNRESOLVED_PARENT: EntityId = 0;

/// Erzeugt `count` Blöcke im Standard-Raster (10 pro Zeile).
pub fn generate_blocks<R: Rng + ?Sized>(
    templates: &[Block],
    count: usize,
    gap: f32,
    rng: &mut R,
) -> Option<Vec<Block>> {
    generate_blocks_in_rows(templates, count, gap, BLOCKS_PER_ROW, rng)
}

/// Erzeugt `count` Blöcke aus zufällig gewählten Vorlagen.
///
/// Zeilen sind unten bündig ausgerichtet; X-Versatz ist die Summe der Breiten
/// (+ Abstand) der vorherigen Blöcke derselben Zeile. Blöcke und Entities
/// werden ab 1 neu nummeriert, `segment_id` der Sewings auf die neuen IDs
/// umgeschrieben. Ratios bleiben unverändert.
///
/// `None` bei `count == 0`, leeren Vorlagen, `per_row == 0` oder ungültigem Abstand.
pub fn generate_blocks_in_rows<R: Rng + ?Sized>(
    templates: &[Block],
    count: usize,
    gap: f32,
    per_row: usize,
    rng: &mut R,
) -> Option<Vec<Block>> {
    if count == 0 || templates.is_empty() || per_row == 0 || !gap.is_finite() || gap < 0.0 {
        return None;
    }

    let sizes: Vec<Bounds> = templates
        .iter()
        .map(|t| {
            t.bounds().unwrap_or(Bounds {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            })
        })
        .collect();
    let max_height = sizes.iter().map(|b| b.size().y).fold(0.0f32, f32::max);

    let mut generated = Vec::with_capacity(count);
    let mut picks: Vec<usize> = Vec::with_capacity(count);
    let mut next_entity_id: EntityId = 1;

    for i in 0..count {
        let template_index = rng.random_range(0..templates.len());
        picks.push(template_index);
        let template = &templates[template_index];
        let bounds = sizes[template_index];

        let col = i % per_row;
        let row = i / per_row;
        let offset_x: f32 = picks[row * per_row..row * per_row + col]
            .iter()
            .map(|&p| sizes[p].size().x + gap)
            .sum();
        let offset_y = row as f32 * (max_height + gap) + (max_height - bounds.size().y);
        let shift = -bounds.min + Vec2::new(offset_x, offset_y) + Vec2::splat(gap);

        let mut id_map: HashMap<EntityId, EntityId> = HashMap::with_capacity(template.entities.len());
        for &old_id in template.entities.keys() {
            id_map.insert(old_id, next_entity_id);
            next_entity_id += 1;
        }

        let remap = |id: EntityId| id_map.get(&id).copied().unwrap_or(UNRESOLVED_PARENT);
        let entities = template.entities.values().map(|entity| {
            let mut entity = entity.clone();
            entity.translate(shift);
            match &mut entity {
                Entity::Segment(segment) => segment.id = remap(segment.id),
                Entity::Sewing(sewing) => {
                    sewing.id = remap(sewing.id);
                    sewing.segment_id = if template.segment(sewing.segment_id).is_some() {
                        remap(sewing.segment_id)
                    } else {
                        UNRESOLVED_PARENT
                    };
                }
            }
            entity
        });

        generated.push(Block::with_entities(
            i as u64 + 1,
            format!("{} #{}", template.name, i + 1),
            entities,
        ));
    }

    log::info!(
        "{} Blöcke aus {} Vorlagen generiert ({} Entities)",
        generated.len(),
        templates.len(),
        next_entity_id - 1
    );

    Some(generated)
}

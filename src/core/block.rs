//! Block: benannte Gruppe von Entities mit ID-Index.

use glam::Vec2;
use indexmap::IndexMap;

use super::entity::{BlockId, Entity, EntityId, Segment, Sewing};
use super::polygon::{assemble, AssembledPolygon};
use super::polyline::{distance_to_polyline, point_in_polygon};
use super::sewing_builder::build_vertexes_from_ratio;

/// Ergebnis eines einzelnen Sewing-Rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Vertexes aus dem Ratio neu erzeugt
    Rebuilt,
    /// `segment_id` zeigt auf kein Segment dieses Blocks
    UnresolvedParent,
    /// Eltern-Segment ohne Länge oder Ratio nicht endlich → unverändert
    Degenerate,
    /// ID gehört zu keinem Sewing
    NotASewing,
}

/// Zusammenfassung von [`rebuild_all_ratios`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildReport {
    /// Neu aufgebaute Sewings
    pub rebuilt: usize,
    /// Sewings mit nicht auflösbarem Eltern-Segment
    pub unresolved: usize,
    /// Sewings auf degeneriertem Eltern-Segment
    pub degenerate: usize,
}

impl RebuildReport {
    fn record(&mut self, outcome: RebuildOutcome) {
        match outcome {
            RebuildOutcome::Rebuilt => self.rebuilt += 1,
            RebuildOutcome::UnresolvedParent => self.unresolved += 1,
            RebuildOutcome::Degenerate => self.degenerate += 1,
            RebuildOutcome::NotASewing => {}
        }
    }
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Block mit geordneten Entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block-ID (opak, stabil über Bearbeitungen)
    pub id: BlockId,
    /// Anzeigename
    pub name: String,
    /// Entities in Dokument-Reihenfolge, indexiert nach ID
    pub entities: IndexMap<EntityId, Entity>,
}

impl Block {
    /// Erstellt einen leeren Block.
    pub fn new(id: BlockId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entities: IndexMap::new(),
        }
    }

    /// Erstellt einen Block aus Entities.
    ///
    /// Doppelte IDs: die spätere ersetzt die frühere, behält aber deren Position
    /// in der Reihenfolge (Hit-Test-Priorität und Polygon-Aufbau folgen ihr).
    pub fn with_entities(
        id: BlockId,
        name: impl Into<String>,
        entities: impl IntoIterator<Item = Entity>,
    ) -> Self {
        let mut block = Self::new(id, name);
        for entity in entities {
            block.insert(entity);
        }
        block
    }

    /// Fügt eine Entity ein und gibt eine ersetzte zurück.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.id(), entity)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.entities.values().filter_map(Entity::as_segment)
    }

    pub fn sewings(&self) -> impl Iterator<Item = &Sewing> {
        self.entities.values().filter_map(Entity::as_sewing)
    }

    pub fn segment(&self, id: EntityId) -> Option<&Segment> {
        self.entities.get(&id).and_then(Entity::as_segment)
    }

    pub fn sewing(&self, id: EntityId) -> Option<&Sewing> {
        self.entities.get(&id).and_then(Entity::as_sewing)
    }

    pub fn sewing_mut(&mut self, id: EntityId) -> Option<&mut Sewing> {
        self.entities.get_mut(&id).and_then(Entity::as_sewing_mut)
    }

    /// Verschiebt alle Entities starr um `delta`. Ratios bleiben unverändert.
    pub fn translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        for entity in self.entities.values_mut() {
            entity.translate(delta);
        }
    }

    /// Umriss aus den Segmenten in Dokument-Reihenfolge.
    pub fn outline(&self) -> AssembledPolygon {
        assemble(self.segments().map(|s| s.vertexes.as_slice()))
    }

    /// Liegt `point` im Block-Umriss?
    pub fn contains_point(&self, point: Vec2) -> bool {
        let outline = self.outline();
        outline.is_area() && point_in_polygon(point, &outline.points)
    }

    /// Nächstgelegenes Segment (mit ≥2 Vertexes); bei Gleichstand das erste.
    pub fn nearest_segment(&self, point: Vec2) -> Option<&Segment> {
        let mut best: Option<(&Segment, f32)> = None;
        for segment in self.segments().filter(|s| s.vertexes.len() >= 2) {
            let distance = distance_to_polyline(point, &segment.vertexes);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((segment, distance)),
            }
        }
        best.map(|(segment, _)| segment)
    }

    /// Bounding-Box über alle Vertexes; `None` ohne Vertexes.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut vertexes = self.entities.values().flat_map(|e| e.vertexes().iter());
        let first = *vertexes.next()?;
        let bounds = vertexes.fold(Bounds { min: first, max: first }, |b, v| Bounds {
            min: b.min.min(*v),
            max: b.max.max(*v),
        });
        Some(bounds)
    }

    /// Baut die Vertexes eines Sewings aus seinem Ratio neu auf.
    pub fn rebuild_sewing(&mut self, sewing_id: EntityId) -> RebuildOutcome {
        let Some(sewing) = self.sewing(sewing_id) else {
            return RebuildOutcome::NotASewing;
        };
        let Some(parent) = self.segment(sewing.segment_id) else {
            return RebuildOutcome::UnresolvedParent;
        };
        if parent.length() <= 0.0 || !sewing.ratio.is_finite() {
            return RebuildOutcome::Degenerate;
        }

        let vertexes = build_vertexes_from_ratio(&parent.vertexes, sewing.ratio.start, sewing.ratio.end);
        if let Some(sewing) = self.sewing_mut(sewing_id) {
            sewing.vertexes = vertexes;
        }
        RebuildOutcome::Rebuilt
    }

    /// Baut alle Sewings dieses Blocks neu auf.
    pub fn rebuild_sewings(&mut self) -> RebuildReport {
        let ids: Vec<EntityId> = self.sewings().map(|s| s.id).collect();
        let mut report = RebuildReport::default();
        for id in ids {
            let outcome = self.rebuild_sewing(id);
            if outcome == RebuildOutcome::UnresolvedParent {
                log::warn!(
                    "Block {}: Sewing {} verweist auf unbekanntes Segment",
                    self.id,
                    id
                );
            }
            report.record(outcome);
        }
        report
    }
}

/// Baut alle Sewings aller Blöcke aus ihren gespeicherten Ratios neu auf.
///
/// Nicht auflösbare Eltern werden gezählt (und geloggt), nicht still übergangen.
pub fn rebuild_all_ratios(blocks: &mut [Block]) -> RebuildReport {
    let mut report = RebuildReport::default();
    for block in blocks.iter_mut() {
        let block_report = block.rebuild_sewings();
        report.rebuilt += block_report.rebuilt;
        report.unresolved += block_report.unresolved;
        report.degenerate += block_report.degenerate;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ratio::RatioSpan;
    use approx::assert_relative_eq;

    fn square_block() -> Block {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let mut entities: Vec<Entity> = (0..4)
            .map(|i| {
                Entity::from(Segment {
                    id: i as u64 + 1,
                    kind: "edge".into(),
                    vertexes: vec![corners[i], corners[(i + 1) % 4]],
                })
            })
            .collect();
        entities.push(Entity::from(Sewing {
            id: 10,
            kind: "seam".into(),
            vertexes: Vec::new(),
            segment_id: 1,
            ratio: RatioSpan::new(0.2, 0.6),
        }));
        Block::with_entities(1, "Quadrat", entities)
    }

    #[test]
    fn rebuild_projects_ratio_onto_parent() {
        let mut block = square_block();
        assert_eq!(block.rebuild_sewing(10), RebuildOutcome::Rebuilt);

        let sewing = block.sewing(10).expect("Sewing erwartet");
        assert_eq!(sewing.vertexes.len(), 2);
        assert_relative_eq!(sewing.vertexes[0].x, 2.0);
        assert_relative_eq!(sewing.vertexes[1].x, 6.0);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut block = square_block();
        block.rebuild_sewings();
        let first = block.clone();
        block.rebuild_sewings();
        assert_eq!(block, first);
    }

    #[test]
    fn unresolved_parent_keeps_vertexes_and_is_counted() {
        let mut block = square_block();
        let kept = vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        if let Some(sewing) = block.sewing_mut(10) {
            sewing.segment_id = 99;
            sewing.vertexes = kept.clone();
        }

        let mut blocks = vec![block];
        let report = rebuild_all_ratios(&mut blocks);
        assert_eq!(report.unresolved, 1);
        assert_eq!(report.rebuilt, 0);
        assert_eq!(blocks[0].sewing(10).map(|s| s.vertexes.clone()), Some(kept));
    }

    #[test]
    fn non_finite_ratio_leaves_sewing_untouched() {
        let mut block = square_block();
        if let Some(sewing) = block.sewing_mut(10) {
            sewing.ratio = RatioSpan::new(f32::NAN, 0.5);
        }
        assert_eq!(block.rebuild_sewing(10), RebuildOutcome::Degenerate);
        assert!(block.sewing(10).map(|s| s.vertexes.is_empty()).unwrap_or(false));
        assert_eq!(block.rebuild_sewing(1), RebuildOutcome::NotASewing);
    }

    #[test]
    fn translate_moves_geometry_not_ratio() {
        let mut block = square_block();
        block.rebuild_sewings();
        block.translate(Vec2::new(5.0, 5.0));

        let sewing = block.sewing(10).expect("Sewing erwartet");
        assert_eq!(sewing.ratio, RatioSpan::new(0.2, 0.6));
        assert_relative_eq!(sewing.vertexes[0].x, 7.0);
        assert!(block.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!block.contains_point(Vec2::new(2.0, 2.0)));

        // Rebuild nach Translation ergibt dieselbe Geometrie
        let before = sewing.vertexes.clone();
        block.rebuild_sewing(10);
        let after = &block.sewing(10).expect("Sewing erwartet").vertexes;
        for (a, b) in before.iter().zip(after) {
            assert!(a.distance(*b) < 1e-4);
        }
    }

    #[test]
    fn outline_and_bounds() {
        let block = square_block();
        let outline = block.outline();
        assert_eq!(outline.points.len(), 5);
        assert_eq!(outline.skipped, 0);
        assert!(block.contains_point(Vec2::new(5.0, 5.0)));

        let bounds = block.bounds().expect("Bounds erwartet");
        assert_eq!(bounds.size(), Vec2::new(10.0, 10.0));
        assert!(Block::new(2, "leer").bounds().is_none());
    }

    #[test]
    fn nearest_segment_prefers_first_on_tie() {
        let block = square_block();
        // Ecke (0,0): Segment 1 und 4 gleich weit
        let nearest = block.nearest_segment(Vec2::new(-1.0, -1.0)).expect("Segment erwartet");
        assert_eq!(nearest.id, 1);
        let nearest = block.nearest_segment(Vec2::new(11.0, 5.0)).expect("Segment erwartet");
        assert_eq!(nearest.id, 2);
    }

    #[test]
    fn duplicate_id_replaces_entity_in_place() {
        let segment = |id, x: f32| {
            Entity::from(Segment {
                id,
                kind: String::new(),
                vertexes: vec![Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0)],
            })
        };
        let block = Block::with_entities(
            1,
            "Doppelt",
            [segment(1, 0.0), segment(2, 5.0), segment(1, 9.0)],
        );

        let ids: Vec<EntityId> = block.entities.keys().copied().collect();
        assert_eq!(ids, vec![1, 2]);
        let replaced = block.segment(1).expect("Segment erwartet");
        assert_eq!(replaced.vertexes[0], Vec2::new(9.0, 0.0));
    }
}

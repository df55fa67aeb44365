//! Drag-Constraint-Solver: verschiebt ein Sewing entlang seines Eltern-Segments.
//!
//! Zustände `Idle → Dragging → Idle`. Beim Start wird der relative Greifpunkt
//! (Anker) innerhalb des Sewings und dessen Spanne festgehalten; jede
//! Cursor-Bewegung projiziert den Cursor auf das nächstgelegene Segment des
//! Blocks und legt das Sewing so, dass Anker und Spanne erhalten bleiben.
//! Wechselt das nächstgelegene Segment, wandert das Sewing mit (Re-Parenting).

use glam::Vec2;

use super::block::Block;
use super::entity::{BlockId, EntityId};
use super::polyline::arc_length_of_point;
use super::ratio::{project_cursor_arc_length, RatioSpan, SeamHysteresis};
use super::sewing_builder::build_vertexes_from_ratio;

/// Anker, wenn sich der Greifpunkt nicht bestimmen lässt (Sewing ohne Spanne).
pub const DEFAULT_ANCHOR_RATIO: f32 = 0.5;

/// Letzte stetige Cursor-Arc-Length auf einem bestimmten Eltern-Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeamContinuity {
    parent_id: EntityId,
    arc_length: f32,
}

/// Aktive Drag-Geste auf einem Sewing.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Block des Sewings
    pub block_id: BlockId,
    /// Gezogenes Sewing
    pub sewing_id: EntityId,
    /// Relativer Greifpunkt innerhalb des Sewings (0 = Start, 1 = Ende)
    pub anchor: f32,
    /// Spanne des Sewings als Ratio (über die ganze Geste konstant)
    pub span: f32,
    /// Naht-Hysterese für geschlossene Eltern
    pub hysteresis: SeamHysteresis,
    continuity: Option<SeamContinuity>,
}

/// Zustand des Drag-Solvers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Drag-Solver mit explizitem Zustand.
#[derive(Debug, Clone, Default)]
pub struct SewingDrag {
    pub state: DragState,
}

impl SewingDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Startet eine Geste. Gibt `false` zurück, wenn kein Sewing/Eltern-Segment auflösbar ist.
    pub fn begin(
        &mut self,
        point: Vec2,
        block: &Block,
        sewing_id: EntityId,
        hysteresis: SeamHysteresis,
    ) -> bool {
        match begin_drag(point, block, sewing_id, hysteresis) {
            Some(session) => {
                self.state = DragState::Dragging(session);
                true
            }
            None => {
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// Aktualisiert das gezogene Sewing. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn update(&mut self, point: Vec2, blocks: &mut [Block]) -> bool {
        match &mut self.state {
            DragState::Dragging(session) => update_drag(point, session, blocks),
            DragState::Idle => false,
        }
    }

    /// Beendet die Geste und verwirft Anker und Naht-Zustand.
    pub fn end(&mut self) -> Option<DragSession> {
        end_drag(&mut self.state)
    }
}

/// Anchoring: berechnet Anker und Spanne für ein Sewing unter dem Cursor.
///
/// `None` bei unbekanntem Sewing oder nicht auflösbarem Eltern-Segment.
pub fn begin_drag(
    point: Vec2,
    block: &Block,
    sewing_id: EntityId,
    hysteresis: SeamHysteresis,
) -> Option<DragSession> {
    let sewing = block.sewing(sewing_id)?;
    let parent = block.segment(sewing.segment_id)?;

    let total = parent.length();
    let closed = parent.is_closed();
    let span = sewing.ratio.span(closed);

    let anchor = if total > 0.0 && span > 0.0 {
        let cursor_ratio = arc_length_of_point(&parent.vertexes, point) / total;
        let offset = cursor_ratio - sewing.ratio.start;
        let offset = if closed {
            // Fenster um die Spanne: Greifpunkte knapp vor dem Start bleiben negativ
            let wrapped = offset.rem_euclid(1.0);
            if wrapped > span + (1.0 - span) * 0.5 {
                wrapped - 1.0
            } else {
                wrapped
            }
        } else {
            offset
        };
        (offset / span).clamp(0.0, 1.0)
    } else {
        DEFAULT_ANCHOR_RATIO
    };
    let anchor = if anchor.is_finite() {
        anchor
    } else {
        DEFAULT_ANCHOR_RATIO
    };

    log::debug!(
        "Sewing-Drag gestartet: Block {}, Sewing {}, Anker {:.3}, Spanne {:.3}",
        block.id,
        sewing_id,
        anchor,
        span
    );

    Some(DragSession {
        block_id: block.id,
        sewing_id,
        anchor,
        span,
        hysteresis,
        continuity: None,
    })
}

/// Dragging: legt das Sewing unter den Cursor.
///
/// Offene Eltern: Überlauf wird an den Rand geschoben (Spanne bleibt), eine
/// Spanne > 1 wird auf [0, 1] gekürzt. Geschlossene Eltern: keine Klemmung,
/// Start wird nach [0, 1) normiert und `end = start + span`.
/// Degeneriertes Eltern-Segment oder nicht-endliche Werte → keine Änderung.
pub fn update_drag(point: Vec2, session: &mut DragSession, blocks: &mut [Block]) -> bool {
    let Some(block) = blocks.iter_mut().find(|b| b.id == session.block_id) else {
        return false;
    };
    if block.sewing(session.sewing_id).is_none() {
        return false;
    }
    let Some(parent) = block.nearest_segment(point) else {
        return false;
    };

    let parent_id = parent.id;
    let total = parent.length();
    if total <= 0.0 || !total.is_finite() {
        return false;
    }
    let closed = parent.is_closed();

    // Stetigkeits-Hinweis gilt nur für dasselbe Eltern-Segment
    let previous = session
        .continuity
        .filter(|c| c.parent_id == parent_id)
        .map(|c| c.arc_length);
    let cursor_arc =
        project_cursor_arc_length(&parent.vertexes, point, previous, session.hysteresis);
    let cursor_ratio = cursor_arc / total;

    let span = session.span;
    let mut start = cursor_ratio - session.anchor * span;
    let mut end = start + span;
    if closed {
        start = start.rem_euclid(1.0);
        end = start + span;
    } else if span > 1.0 {
        start = 0.0;
        end = 1.0;
    } else if start < 0.0 {
        start = 0.0;
        end = span;
    } else if end > 1.0 {
        end = 1.0;
        start = (1.0 - span).max(0.0);
    }

    if !start.is_finite() || !end.is_finite() {
        return false;
    }

    let vertexes = build_vertexes_from_ratio(&parent.vertexes, start, end);
    session.continuity = Some(SeamContinuity {
        parent_id,
        arc_length: cursor_arc,
    });

    let Some(sewing) = block.sewing_mut(session.sewing_id) else {
        return false;
    };
    if sewing.segment_id != parent_id {
        log::debug!(
            "Sewing {} wechselt Eltern-Segment {} → {}",
            sewing.id,
            sewing.segment_id,
            parent_id
        );
    }
    sewing.segment_id = parent_id;
    sewing.ratio = RatioSpan::new(start, end);
    sewing.vertexes = vertexes;
    true
}

/// Idle: beendet eine laufende Geste. Geometrie bleibt unverändert.
pub fn end_drag(state: &mut DragState) -> Option<DragSession> {
    match std::mem::take(state) {
        DragState::Dragging(session) => {
            log::debug!("Sewing-Drag beendet: Sewing {}", session.sewing_id);
            Some(session)
        }
        DragState::Idle => None,
    }
}

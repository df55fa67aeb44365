//! Entities eines Blocks: Segmente (Geometrie) und Sewings (abgeleitet).

use glam::Vec2;

use super::polyline::{arc_length, is_closed};
use super::ratio::RatioSpan;

/// Eindeutige ID einer Entity innerhalb eines Dokuments.
pub type EntityId = u64;
/// Eindeutige ID eines Blocks.
pub type BlockId = u64;

/// Ebene einer Entity (entspricht dem `layer`-Feld im Dokument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Segment,
    Sewing,
}

impl Layer {
    /// Name wie im Dokument.
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Segment => "segment",
            Layer::Sewing => "sewing",
        }
    }
}

/// Segment: Polyline als Geometrie-Quelle.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Entity-ID
    pub id: EntityId,
    /// Freitext-Typ aus dem Dokument (`type`)
    pub kind: String,
    /// Vertexes in Laufrichtung
    pub vertexes: Vec<Vec2>,
}

impl Segment {
    /// Gesamtlänge der Polyline.
    pub fn length(&self) -> f32 {
        arc_length(&self.vertexes)
    }

    /// Geschlossene Kurve (Start ≈ Ende)?
    pub fn is_closed(&self) -> bool {
        is_closed(&self.vertexes)
    }
}

/// Sewing: an ein Segment gebundene Teilkurve.
///
/// Das Ratio ist die Wahrheit; `vertexes` ist eine zwischengespeicherte
/// Projektion auf das aktuelle Eltern-Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Sewing {
    /// Entity-ID
    pub id: EntityId,
    /// Freitext-Typ aus dem Dokument (`type`)
    pub kind: String,
    /// Abgeleitete Vertexes
    pub vertexes: Vec<Vec2>,
    /// Eltern-Segment (nicht besitzende Referenz innerhalb desselben Blocks)
    pub segment_id: EntityId,
    /// Normierter Bereich auf dem Eltern-Segment
    pub ratio: RatioSpan,
}

/// Entity eines Blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Segment(Segment),
    Sewing(Sewing),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Segment(s) => s.id,
            Entity::Sewing(s) => s.id,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Entity::Segment(s) => &s.kind,
            Entity::Sewing(s) => &s.kind,
        }
    }

    pub fn layer(&self) -> Layer {
        match self {
            Entity::Segment(_) => Layer::Segment,
            Entity::Sewing(_) => Layer::Sewing,
        }
    }

    pub fn vertexes(&self) -> &[Vec2] {
        match self {
            Entity::Segment(s) => &s.vertexes,
            Entity::Sewing(s) => &s.vertexes,
        }
    }

    pub fn vertexes_mut(&mut self) -> &mut Vec<Vec2> {
        match self {
            Entity::Segment(s) => &mut s.vertexes,
            Entity::Sewing(s) => &mut s.vertexes,
        }
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Entity::Segment(s) => Some(s),
            Entity::Sewing(_) => None,
        }
    }

    pub fn as_sewing(&self) -> Option<&Sewing> {
        match self {
            Entity::Sewing(s) => Some(s),
            Entity::Segment(_) => None,
        }
    }

    pub fn as_sewing_mut(&mut self) -> Option<&mut Sewing> {
        match self {
            Entity::Sewing(s) => Some(s),
            Entity::Segment(_) => None,
        }
    }

    /// Mindestens zwei Vertexes (zeichen- und treffbar).
    pub fn is_renderable(&self) -> bool {
        self.vertexes().len() >= 2
    }

    /// Verschiebt alle Vertexes starr; das Ratio eines Sewings bleibt unverändert.
    pub fn translate(&mut self, delta: Vec2) {
        for vertex in self.vertexes_mut() {
            *vertex += delta;
        }
    }
}

impl From<Segment> for Entity {
    fn from(segment: Segment) -> Self {
        Entity::Segment(segment)
    }
}

impl From<Sewing> for Entity {
    fn from(sewing: Sewing) -> Self {
        Entity::Sewing(sewing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_keeps_sewing_ratio() {
        let mut entity = Entity::from(Sewing {
            id: 7,
            kind: "seam".into(),
            vertexes: vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)],
            segment_id: 1,
            ratio: RatioSpan::new(0.1, 0.4),
        });

        entity.translate(Vec2::new(2.0, -1.0));

        let sewing = entity.as_sewing().expect("Sewing erwartet");
        assert_eq!(sewing.vertexes[0], Vec2::new(2.0, -1.0));
        assert_eq!(sewing.vertexes[1], Vec2::new(7.0, -1.0));
        assert_eq!(sewing.ratio, RatioSpan::new(0.1, 0.4));
    }

    #[test]
    fn accessors_follow_variant() {
        let entity = Entity::from(Segment {
            id: 3,
            kind: "edge".into(),
            vertexes: vec![Vec2::ZERO],
        });
        assert_eq!(entity.id(), 3);
        assert_eq!(entity.kind(), "edge");
        assert_eq!(entity.layer(), Layer::Segment);
        assert!(entity.as_sewing().is_none());
        assert!(!entity.is_renderable());
    }
}

//! Laufrichtung eines Sewings relativ zu seinem geschlossenen Eltern-Segment.

use glam::Vec2;

use super::polyline::{arc_length, arc_length_of_point, is_closed};

/// Mindestabstand (Arc-Length) zwischen Anfang und Ende für eine eindeutige Richtung.
const MIN_DIRECTION_SPAN: f32 = 1.0;

/// Ergebnis der Richtungs-Klassifikation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sewing läuft in Umlaufrichtung des Eltern-Segments
    Same,
    /// Sewing läuft gegen die Umlaufrichtung
    Opposite,
    /// Nicht bestimmbar (offenes/degeneriertes Eltern-Segment oder zu kurzes Sewing)
    Unknown,
}

impl Direction {
    /// Kurzbezeichnung für Textausgaben.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Same => "same",
            Direction::Opposite => "opposite",
            Direction::Unknown => "unknown",
        }
    }
}

/// Klassifiziert die Richtung von `sewing` auf `parent`.
///
/// Beide Endpunkte werden auf das Eltern-Segment projiziert. Liegt die
/// Differenz über L/2, wird der kleinere Wert um L verschoben (Naht).
pub fn classify(parent: &[Vec2], sewing: &[Vec2]) -> Direction {
    let (Some(&first), Some(&last)) = (sewing.first(), sewing.last()) else {
        return Direction::Unknown;
    };
    if sewing.len() < 2 || !is_closed(parent) {
        return Direction::Unknown;
    }
    let total = arc_length(parent);
    if total <= 0.0 || !total.is_finite() {
        return Direction::Unknown;
    }

    let mut start = arc_length_of_point(parent, first);
    let mut end = arc_length_of_point(parent, last);
    if (end - start).abs() > total * 0.5 {
        if start < end {
            start += total;
        } else {
            end += total;
        }
    }

    let diff = end - start;
    if diff.abs() <= MIN_DIRECTION_SPAN {
        Direction::Unknown
    } else if diff > 0.0 {
        Direction::Same
    } else {
        Direction::Opposite
    }
}

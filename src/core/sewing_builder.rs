//! Erzeugt die Vertex-Folge eines Sewings aus seinem Eltern-Segment.
//!
//! Das Sewing übernimmt die Form des Eltern-Segments zwischen zwei
//! Arc-Length-Positionen: Start-Sample, alle inneren Eltern-Vertexes
//! (keine Unterabtastung, Knicke bleiben erhalten), End-Sample.

use glam::Vec2;

use super::polyline::{arc_length, cumulative_lengths, is_closed, point_at_arc_length};

/// End-Sample wird verworfen, wenn es näher als dieser Abstand am letzten Punkt liegt.
const END_POINT_MERGE_DISTANCE: f32 = 0.1;

/// Baut die Vertexes des Teilstücks `[start_offset, end_offset]` von `parent`.
///
/// - Offen: Offsets auf [0, L] geklemmt, Ende ≥ Start; Spanne ≤ 0 → leer.
/// - Geschlossen: Start modulo L, Spanne modulo L (eine rohe Spanne ≥ L ist
///   der volle Umlauf); läuft die Spanne über L hinaus, wird über die Naht
///   gewickelt (Ende des Segments, dann sein Anfang).
pub fn build_vertexes(parent: &[Vec2], start_offset: f32, end_offset: f32) -> Vec<Vec2> {
    if parent.len() < 2 || !start_offset.is_finite() || !end_offset.is_finite() {
        return Vec::new();
    }
    let total = arc_length(parent);
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let closed = is_closed(parent);
    let (start, end) = if closed {
        let start = start_offset.rem_euclid(total);
        let raw_span = end_offset - start_offset;
        let span = if raw_span >= total {
            total
        } else {
            raw_span.rem_euclid(total)
        };
        (start, start + span)
    } else {
        let start = start_offset.clamp(0.0, total);
        (start, end_offset.clamp(start, total))
    };

    if end - start <= 0.0 {
        return Vec::new();
    }

    let Some(start_point) = point_at_arc_length(parent, start) else {
        return Vec::new();
    };
    let cumulative = cumulative_lengths(parent);

    let mut result = vec![start_point];
    for (vertex, &accumulated) in parent.iter().zip(&cumulative) {
        if accumulated > start && accumulated < end {
            result.push(*vertex);
        }
    }
    if closed && end > total {
        // Zweiter Umlauf; Index 0 fällt mit dem letzten Vertex (Naht) zusammen
        for (vertex, &accumulated) in parent.iter().zip(&cumulative).skip(1) {
            let unwrapped = accumulated + total;
            if unwrapped > start && unwrapped < end {
                result.push(*vertex);
            }
        }
    }

    let end_local = if end > total { end - total } else { end };
    if let Some(end_point) = point_at_arc_length(parent, end_local) {
        let keep = match result.last() {
            Some(last) => result.len() < 2 || last.distance(end_point) > END_POINT_MERGE_DISTANCE,
            None => true,
        };
        if keep {
            result.push(end_point);
        }
    }

    result
}

/// Wie [`build_vertexes`], aber mit Ratios statt Offsets.
///
/// Bei geschlossenen Eltern dürfen die Ratios außerhalb von [0, 1] liegen.
pub fn build_vertexes_from_ratio(parent: &[Vec2], start_ratio: f32, end_ratio: f32) -> Vec<Vec2> {
    let total = arc_length(parent);
    if total <= 0.0 || !start_ratio.is_finite() || !end_ratio.is_finite() {
        return Vec::new();
    }
    build_vertexes(parent, start_ratio * total, end_ratio * total)
}

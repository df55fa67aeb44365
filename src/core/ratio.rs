//! Umrechnung zwischen absoluter Arc-Length und normiertem Ratio.
//!
//! Offene Eltern-Segmente klemmen auf [0, L] bzw. [0, 1]; geschlossene
//! rechnen modulo L und klemmen nie.

use glam::Vec2;

use super::polyline::{arc_length, arc_length_of_point, is_closed};

/// Schwellwerte für die Naht-Hysterese bei geschlossenen Kurven (Anteile von L).
///
/// Ein Sprung gilt als Naht-Überquerung, wenn der vorige Wert oberhalb von
/// `high` und der neue unterhalb von `low` liegt (oder umgekehrt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamHysteresis {
    /// Unterer Anteil (Standard 0.25)
    pub low: f32,
    /// Oberer Anteil (Standard 0.75)
    pub high: f32,
}

impl Default for SeamHysteresis {
    fn default() -> Self {
        Self {
            low: 0.25,
            high: 0.75,
        }
    }
}

/// Normierter Bereich `[start, end]` eines Sewings auf seinem Eltern-Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioSpan {
    pub start: f32,
    pub end: f32,
}

impl RatioSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Spannweite des Bereichs.
    ///
    /// Bei geschlossenen Eltern ist ein `end < start` ein Wrap über die Naht
    /// und ergibt eine positive Spanne.
    pub fn span(&self, closed: bool) -> f32 {
        let raw = self.end - self.start;
        if closed {
            if raw < 0.0 {
                raw + 1.0
            } else {
                raw
            }
        } else {
            raw.max(0.0)
        }
    }

    /// Beide Werte endlich?
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Offset → Ratio. `None` bei Länge ≤ 0 oder nicht-endlichem Ergebnis.
pub fn offset_to_ratio(offset: f32, total_length: f32, closed: bool) -> Option<f32> {
    if total_length <= 0.0 || !total_length.is_finite() {
        return None;
    }
    let offset = normalize_offset(offset, total_length, closed);
    let ratio = offset / total_length;
    ratio.is_finite().then_some(ratio)
}

/// Ratio → Offset. `None` bei Länge ≤ 0 oder nicht-endlichem Ergebnis.
pub fn ratio_to_offset(ratio: f32, total_length: f32, closed: bool) -> Option<f32> {
    if total_length <= 0.0 || !total_length.is_finite() || !ratio.is_finite() {
        return None;
    }
    let offset = normalize_offset(ratio * total_length, total_length, closed);
    offset.is_finite().then_some(offset)
}

/// Bringt einen Offset in den gültigen Bereich: modulo L (geschlossen) bzw. geklemmt (offen).
pub fn normalize_offset(offset: f32, total_length: f32, closed: bool) -> f32 {
    if total_length <= 0.0 || !total_length.is_finite() {
        return 0.0;
    }
    if closed {
        offset.rem_euclid(total_length)
    } else {
        offset.clamp(0.0, total_length)
    }
}

/// Bringt ein Ratio in den gültigen Bereich: modulo 1 (geschlossen) bzw. geklemmt (offen).
pub fn normalize_ratio(ratio: f32, closed: bool) -> f32 {
    if closed {
        ratio.rem_euclid(1.0)
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Einmalige Umrechnung alter Offset-Felder (`startOffset`/`endOffset`) in einen Ratio-Bereich.
///
/// Fehlender Start → 0, fehlendes Ende → L.
/// - Offen: beide auf [0, L] geklemmt mit Ende ≥ Start.
/// - Geschlossen: Start modulo L, Spanne `(end − start)` modulo L (rohe
///   Spanne ≥ L ist der volle Umlauf), `end = start + span`. Das Ende darf
///   also über 1 hinausgehen.
pub fn ratio_span_from_offsets(
    parent_length: f32,
    closed: bool,
    start_offset: Option<f32>,
    end_offset: Option<f32>,
) -> Option<RatioSpan> {
    if parent_length <= 0.0 || !parent_length.is_finite() {
        return None;
    }
    let start_offset = start_offset.filter(|v| v.is_finite()).unwrap_or(0.0);
    let end_offset = end_offset.filter(|v| v.is_finite()).unwrap_or(parent_length);

    let (start, end) = if closed {
        let start = start_offset.rem_euclid(parent_length);
        let raw_span = end_offset - start_offset;
        let span = if raw_span >= parent_length {
            parent_length
        } else {
            raw_span.rem_euclid(parent_length)
        };
        (start, start + span)
    } else {
        let start = start_offset.clamp(0.0, parent_length);
        (start, end_offset.clamp(start, parent_length))
    };

    let span = RatioSpan::new(start / parent_length, end / parent_length);
    span.is_finite().then_some(span)
}

/// Arc-Length des Cursors auf `vertexes`, stetig über die Naht geschlossener Kurven.
///
/// `previous` ist die (ggf. bereits entwickelte) Schätzung des letzten Frames.
/// Bei geschlossenen Kurven wird das Ergebnis um ganze Umläufe verschoben,
/// sodass aufeinanderfolgende Werte nicht an der Naht springen. Offene Kurven
/// liefern immer den rohen Wert in [0, L].
pub fn project_cursor_arc_length(
    vertexes: &[Vec2],
    cursor: Vec2,
    previous: Option<f32>,
    hysteresis: SeamHysteresis,
) -> f32 {
    let raw = arc_length_of_point(vertexes, cursor);
    let total = arc_length(vertexes);

    let Some(previous) = previous.filter(|p| p.is_finite()) else {
        return raw;
    };
    if total <= 0.0 || !is_closed(vertexes) {
        return raw;
    }

    let turns = (previous / total).floor();
    let previous_local = previous - turns * total;
    let low = hysteresis.low * total;
    let high = hysteresis.high * total;
    let half = total * 0.5;

    let crossed_forward =
        previous_local > high && raw < low && (previous_local - raw) > half;
    let crossed_backward =
        previous_local < low && raw > high && (raw - previous_local) > half;

    let turns = if crossed_forward {
        turns + 1.0
    } else if crossed_backward {
        turns - 1.0
    } else {
        turns
    };

    raw + turns * total
}

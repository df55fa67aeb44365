//! Reine Polyline-Geometrie: Distanzen, Projektion, Arc-Length, Sampling.
//!
//! Alle Funktionen sind total: degenerierte Eingaben (leere Listen,
//! Null-Längen-Segmente) liefern neutrale Werte statt zu paniken.

use glam::Vec2;

/// Toleranz (Welteinheiten), ab der erster und letzter Vertex als identisch gelten.
pub const CLOSED_CURVE_TOLERANCE: f32 = 1.0;

/// Abstand vor/nach dem Sample-Punkt für die Tangenten-Schätzung.
const TANGENT_PROBE_DISTANCE: f32 = 0.5;

/// Position auf einer Polyline: Index des Teilstücks und Parameter `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineParameter {
    /// Index des Vertex-Paars (`vertexes[i]` → `vertexes[i + 1]`)
    pub segment_index: usize,
    /// Geklemmter Parameter innerhalb des Teilstücks
    pub t: f32,
}

/// Punkt + normierte Tangente an einer Arc-Length-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    /// Interpolierter Punkt auf der Polyline
    pub point: Vec2,
    /// Normierte Laufrichtung (kann bei vollständig degenerierter Polyline `ZERO` sein)
    pub tangent: Vec2,
}

/// Projiziert `point` auf die Strecke `a`–`b` (Parameter auf [0, 1] geklemmt).
///
/// Gibt `(t, projizierter Punkt)` zurück. Null-Längen-Strecken liefern `(0, a)`.
#[inline]
pub fn project_onto_segment(point: Vec2, a: Vec2, b: Vec2) -> (f32, Vec2) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 0.0 {
        return (0.0, a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (t, a + ab * t)
}

/// Abstand von `point` zur Strecke `a`–`b`.
#[inline]
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let (_, projected) = project_onto_segment(point, a, b);
    point.distance(projected)
}

/// Minimaler Abstand von `point` zur Polyline.
///
/// Bei genau einem Vertex: direkter Punktabstand. Bei leerer Liste: `f32::INFINITY`
/// (trifft nie einen Schwellwert).
pub fn distance_to_polyline(point: Vec2, vertexes: &[Vec2]) -> f32 {
    match vertexes {
        [] => f32::INFINITY,
        [single] => point.distance(*single),
        _ => vertexes
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Findet das Teilstück und den Parameter mit minimalem Abstand zu `point`.
///
/// Bei Gleichstand gewinnt das erste Teilstück in Laufrichtung.
/// Null-Längen-Teilstücke werden übersprungen; ist alles degeneriert → `{0, 0}`.
pub fn nearest_parameter(point: Vec2, vertexes: &[Vec2]) -> PolylineParameter {
    let mut best = PolylineParameter {
        segment_index: 0,
        t: 0.0,
    };
    let mut best_distance = f32::INFINITY;

    for (i, w) in vertexes.windows(2).enumerate() {
        if w[0] == w[1] {
            continue;
        }
        let (t, projected) = project_onto_segment(point, w[0], w[1]);
        let distance = point.distance(projected);
        if distance < best_distance {
            best_distance = distance;
            best = PolylineParameter { segment_index: i, t };
        }
    }

    best
}

/// Gesamtlänge der Polyline (0 bei weniger als zwei Vertexes).
pub fn arc_length(vertexes: &[Vec2]) -> f32 {
    vertexes.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Kumulierte Arc-Length je Vertex (`result[0] == 0`).
pub fn cumulative_lengths(vertexes: &[Vec2]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vertexes.len());
    let mut accumulated = 0.0f32;
    for (i, vertex) in vertexes.iter().enumerate() {
        if i > 0 {
            accumulated += vertexes[i - 1].distance(*vertex);
        }
        result.push(accumulated);
    }
    result
}

/// Arc-Length vom ersten Vertex bis zur gegebenen Parameter-Position.
pub fn arc_length_at(vertexes: &[Vec2], parameter: PolylineParameter) -> f32 {
    if vertexes.len() < 2 {
        return 0.0;
    }
    let index = parameter.segment_index.min(vertexes.len() - 2);
    let before: f32 = vertexes[..=index]
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum();
    before + parameter.t * vertexes[index].distance(vertexes[index + 1])
}

/// Arc-Length der nächstgelegenen Projektion von `point` auf die Polyline.
pub fn arc_length_of_point(vertexes: &[Vec2], point: Vec2) -> f32 {
    arc_length_at(vertexes, nearest_parameter(point, vertexes))
}

/// Interpolierter Punkt bei `length` (auf [0, Gesamtlänge] geklemmt).
///
/// Gibt `None` zurück, wenn die Polyline leer ist.
pub fn point_at_arc_length(vertexes: &[Vec2], length: f32) -> Option<Vec2> {
    locate(vertexes, length).map(|(index, t)| {
        if index + 1 < vertexes.len() {
            vertexes[index].lerp(vertexes[index + 1], t)
        } else {
            vertexes[index]
        }
    })
}

/// Punkt und Tangente bei `length`.
///
/// Die Tangente wird aus Samples kurz vor und nach der Position geschätzt;
/// an den Enden fällt sie auf die Richtung des enthaltenden Teilstücks zurück.
pub fn point_and_tangent_at_arc_length(vertexes: &[Vec2], length: f32) -> Option<ArcSample> {
    if vertexes.len() < 2 {
        return None;
    }
    let total = arc_length(vertexes);
    let length = length.clamp(0.0, total.max(0.0));
    let (index, t) = locate(vertexes, length)?;
    let index = index.min(vertexes.len() - 2);
    let point = vertexes[index].lerp(vertexes[index + 1], t);

    let before = length - TANGENT_PROBE_DISTANCE;
    let after = length + TANGENT_PROBE_DISTANCE;
    let probed = if before >= 0.0 && after <= total {
        match (
            point_at_arc_length(vertexes, before),
            point_at_arc_length(vertexes, after),
        ) {
            (Some(b), Some(a)) => (a - b).normalize_or_zero(),
            _ => Vec2::ZERO,
        }
    } else {
        Vec2::ZERO
    };

    let tangent = if probed != Vec2::ZERO {
        probed
    } else {
        segment_direction(vertexes, index)
    };

    Some(ArcSample { point, tangent })
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Paritätsregel).
///
/// Polygone mit weniger als drei Punkten enthalten nie etwas.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];

    for &current in polygon {
        let crosses = (current.y > point.y) != (previous.y > point.y);
        if crosses {
            let x_at_y = (previous.x - current.x) * (point.y - current.y)
                / (previous.y - current.y)
                + current.x;
            if point.x < x_at_y {
                inside = !inside;
            }
        }
        previous = current;
    }

    inside
}

/// Geschlossene Kurve: mindestens drei Vertexes, Anfang und Ende innerhalb der Toleranz.
pub fn is_closed(vertexes: &[Vec2]) -> bool {
    match (vertexes.first(), vertexes.last()) {
        (Some(first), Some(last)) if vertexes.len() >= 3 => {
            first.distance(*last) <= CLOSED_CURVE_TOLERANCE
        }
        _ => false,
    }
}

/// Mittelwert aller Vertexes (Label-Anker). Leere Liste → `Vec2::ZERO`.
pub fn centroid(vertexes: &[Vec2]) -> Vec2 {
    if vertexes.is_empty() {
        return Vec2::ZERO;
    }
    vertexes.iter().copied().sum::<Vec2>() / vertexes.len() as f32
}

/// Sucht das Teilstück, in das `length` fällt: `(index, t)`.
fn locate(vertexes: &[Vec2], length: f32) -> Option<(usize, f32)> {
    match vertexes.len() {
        0 => None,
        1 => Some((0, 0.0)),
        _ => {
            let length = length.max(0.0);
            let mut accumulated = 0.0f32;
            for (i, w) in vertexes.windows(2).enumerate() {
                let segment_length = w[0].distance(w[1]);
                if accumulated + segment_length >= length {
                    let t = if segment_length > 0.0 {
                        ((length - accumulated) / segment_length).clamp(0.0, 1.0)
                    } else {
                        0.0
                    };
                    return Some((i, t));
                }
                accumulated += segment_length;
            }
            Some((vertexes.len() - 2, 1.0))
        }
    }
}

/// Normierte Richtung des Teilstücks `index`; sucht bei Null-Länge das nächste brauchbare.
fn segment_direction(vertexes: &[Vec2], index: usize) -> Vec2 {
    let own = (vertexes[index + 1] - vertexes[index]).normalize_or_zero();
    if own != Vec2::ZERO {
        return own;
    }
    vertexes
        .windows(2)
        .map(|w| (w[1] - w[0]).normalize_or_zero())
        .find(|d| *d != Vec2::ZERO)
        .unwrap_or(Vec2::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    fn l_shape() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ]
    }

    #[test]
    fn distance_uses_clamped_projection() {
        let line = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        // Hinter dem Ende: Abstand zum Endpunkt, nicht zur unendlichen Geraden
        assert_relative_eq!(distance_to_polyline(Vec2::new(13.0, 4.0), &line), 5.0);
        assert_relative_eq!(distance_to_polyline(Vec2::new(5.0, 3.0), &line), 3.0);
    }

    #[test]
    fn distance_handles_degenerate_input() {
        assert_eq!(distance_to_polyline(Vec2::ZERO, &[]), f32::INFINITY);
        assert_relative_eq!(
            distance_to_polyline(Vec2::new(3.0, 4.0), &[Vec2::ZERO]),
            5.0
        );
        let zero_length = [Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)];
        assert_relative_eq!(
            distance_to_polyline(Vec2::new(1.0, 4.0), &zero_length),
            3.0
        );
    }

    #[test]
    fn nearest_parameter_prefers_first_on_tie() {
        // Punkt exakt auf der Ecke: Ende von Teilstück 0 und Anfang von Teilstück 1
        let p = nearest_parameter(Vec2::new(10.0, 0.0), &l_shape());
        assert_eq!(p.segment_index, 0);
        assert_relative_eq!(p.t, 1.0);
    }

    #[test]
    fn nearest_parameter_skips_zero_length_pairs() {
        let vertexes = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        ];
        let p = nearest_parameter(Vec2::new(4.0, 1.0), &vertexes);
        assert_eq!(p.segment_index, 1);
        assert_relative_eq!(p.t, 0.4);
    }

    #[test]
    fn arc_length_sums_pairs() {
        assert_relative_eq!(arc_length(&l_shape()), 20.0);
        assert_relative_eq!(arc_length(&[Vec2::ZERO]), 0.0);
        assert_eq!(cumulative_lengths(&l_shape()), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn arc_length_of_point_follows_projection() {
        assert_relative_eq!(arc_length_of_point(&l_shape(), Vec2::new(12.0, 4.0)), 14.0);
    }

    #[test]
    fn point_and_tangent_in_the_middle_of_a_segment() {
        let sample = point_and_tangent_at_arc_length(&l_shape(), 5.0).expect("Sample erwartet");
        assert_relative_eq!(sample.point.x, 5.0);
        assert_relative_eq!(sample.point.y, 0.0);
        assert_relative_eq!(sample.tangent.x, 1.0);
        assert_relative_eq!(sample.tangent.y, 0.0);
    }

    #[test]
    fn tangent_falls_back_to_segment_direction_at_the_ends() {
        let end = point_and_tangent_at_arc_length(&l_shape(), 20.0).expect("Sample erwartet");
        assert_relative_eq!(end.point.y, 10.0);
        assert_relative_eq!(end.tangent.y, 1.0);

        let start = point_and_tangent_at_arc_length(&l_shape(), 0.0).expect("Sample erwartet");
        assert_relative_eq!(start.tangent.x, 1.0);
    }

    #[test]
    fn point_and_tangent_requires_two_vertexes() {
        assert!(point_and_tangent_at_arc_length(&[Vec2::ZERO], 0.0).is_none());
    }

    #[test]
    fn point_in_square() {
        let polygon = square();
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &polygon));
        // Linker Rand zählt nach der Paritätsregel als innen, rechter als außen
        assert!(point_in_polygon(Vec2::new(0.0, 5.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(10.0, 5.0), &polygon));
    }

    #[test]
    fn polygon_needs_three_points() {
        assert!(!point_in_polygon(
            Vec2::new(0.5, 0.0),
            &[Vec2::ZERO, Vec2::new(1.0, 0.0)]
        ));
    }

    #[test]
    fn closed_detection_uses_tolerance() {
        let mut ring = square();
        ring.push(Vec2::new(0.5, 0.5));
        assert!(is_closed(&ring));
        assert!(!is_closed(&square()));
        assert!(!is_closed(&[Vec2::ZERO, Vec2::ZERO]));
    }

    #[test]
    fn centroid_of_square() {
        assert_eq!(centroid(&square()), Vec2::new(5.0, 5.0));
        assert_eq!(centroid(&[]), Vec2::ZERO);
    }
}

//! Fügt verbundene Segment-Polylines zu einem Block-Umriss zusammen.

use glam::Vec2;

/// Ergebnis von [`assemble`]: Umriss-Punkte und Anzahl nicht anschließbarer Segmente.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledPolygon {
    /// Umriss in Laufrichtung (nicht explizit geschlossen)
    pub points: Vec<Vec2>,
    /// Segmente, die weder vorwärts noch rückwärts an den letzten Punkt passten
    pub skipped: usize,
}

impl AssembledPolygon {
    /// Mindestens drei Punkte, also als Fläche testbar.
    pub fn is_area(&self) -> bool {
        self.points.len() >= 3
    }
}

/// Verkettet Segmente in gegebener Reihenfolge zu einem Polygon.
///
/// Das erste Segment mit ≥2 Vertexes bildet den Anfang. Jedes weitere wird
/// vorwärts angehängt, wenn sein erster Vertex exakt dem letzten Punkt
/// entspricht, rückwärts, wenn sein letzter Vertex passt, und sonst übersprungen.
/// Segmente mit weniger als zwei Vertexes werden ignoriert (nicht gezählt).
pub fn assemble<'a, I>(segments: I) -> AssembledPolygon
where
    I: IntoIterator<Item = &'a [Vec2]>,
{
    let mut result = AssembledPolygon::default();

    for vertexes in segments {
        if vertexes.len() < 2 {
            continue;
        }

        let Some(&last) = result.points.last() else {
            result.points.extend_from_slice(vertexes);
            continue;
        };

        // Exakter Vergleich: Blöcke teilen Eckpunkte bitgenau
        if vertexes[0] == last {
            result.points.extend_from_slice(&vertexes[1..]);
        } else if vertexes[vertexes.len() - 1] == last {
            result
                .points
                .extend(vertexes[..vertexes.len() - 1].iter().rev().copied());
        } else {
            result.skipped += 1;
        }
    }

    if result.skipped > 0 {
        log::debug!(
            "Polygon-Aufbau: {} Segment(e) ohne exakten Anschluss übersprungen",
            result.skipped
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn forward_and_reversed_segments_join() {
        let bottom = vec![v(0.0, 0.0), v(10.0, 0.0)];
        let right = vec![v(10.0, 0.0), v(10.0, 10.0)];
        // Rückwärts gespeichert
        let top = vec![v(0.0, 10.0), v(10.0, 10.0)];
        let left = vec![v(0.0, 10.0), v(0.0, 0.0)];

        let polygon = assemble([
            bottom.as_slice(),
            right.as_slice(),
            top.as_slice(),
            left.as_slice(),
        ]);

        assert_eq!(
            polygon.points,
            vec![
                v(0.0, 0.0),
                v(10.0, 0.0),
                v(10.0, 10.0),
                v(0.0, 10.0),
                v(0.0, 0.0)
            ]
        );
        assert_eq!(polygon.skipped, 0);
        assert!(polygon.is_area());
    }

    #[test]
    fn curved_segments_keep_intermediate_points() {
        let arc = vec![v(0.0, 0.0), v(5.0, -2.0), v(10.0, 0.0)];
        let back = vec![v(10.0, 0.0), v(0.0, 0.0)];
        let polygon = assemble([arc.as_slice(), back.as_slice()]);
        assert_eq!(polygon.points.len(), 4);
        assert_eq!(polygon.points[1], v(5.0, -2.0));
    }

    #[test]
    fn unconnected_segment_is_skipped_and_counted() {
        let a = vec![v(0.0, 0.0), v(10.0, 0.0)];
        let stray = vec![v(50.0, 50.0), v(60.0, 50.0)];
        let b = vec![v(10.0, 0.0), v(10.0, 10.0)];

        let polygon = assemble([a.as_slice(), stray.as_slice(), b.as_slice()]);
        assert_eq!(polygon.skipped, 1);
        assert_eq!(polygon.points, vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)]);
    }

    #[test]
    fn near_miss_does_not_connect() {
        let a = vec![v(0.0, 0.0), v(10.0, 0.0)];
        let b = vec![v(10.0001, 0.0), v(10.0, 10.0)];
        let polygon = assemble([a.as_slice(), b.as_slice()]);
        assert_eq!(polygon.skipped, 1);
        assert!(!polygon.is_area());
    }

    #[test]
    fn degenerate_segments_are_ignored() {
        let single = vec![v(3.0, 3.0)];
        let a = vec![v(0.0, 0.0), v(10.0, 0.0)];
        let polygon = assemble([single.as_slice(), a.as_slice()]);
        assert_eq!(polygon.points, a);
        assert_eq!(polygon.skipped, 0);

        let empty: [&[Vec2]; 0] = [];
        assert!(assemble(empty).points.is_empty());
    }
}

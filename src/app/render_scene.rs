//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::polyline::{arc_length, centroid, point_and_tangent_at_arc_length};
use crate::core::{classify, Block, Direction, Entity};
use crate::shared::{RenderScene, SceneArrow, SceneBlockFill, SceneLabel, ScenePolyline};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let mut scene = RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        cursor: state.view.cursor,
        ..RenderScene::default()
    };

    for block in &state.blocks {
        push_block_fill(state, block, &mut scene);

        for entity in block.entities.values() {
            if !entity.is_renderable() {
                continue;
            }
            scene.polylines.push(ScenePolyline {
                block_id: block.id,
                entity_id: entity.id(),
                layer: entity.layer(),
                vertexes: entity.vertexes().to_vec(),
                selected: state.selection.is_entity_selected(block.id, entity.id()),
                hovered: state.hover.is_entity_hovered(block.id, entity.id()),
            });
            scene.labels.push(label_for(block, entity));

            if let Some(arrow) = arrow_for(block, entity, state.options.arrow_ratio) {
                scene.arrows.push(arrow);
            }
        }
    }

    scene
}

/// Fläche nur für gehoverte oder selektierte Blöcke mit echtem Umriss.
fn push_block_fill(state: &AppState, block: &Block, scene: &mut RenderScene) {
    let selected = state.selection.is_block_selected(block.id);
    let hovered = state.hover.is_block_hovered(block.id);
    if !selected && !hovered {
        return;
    }
    let outline = block.outline();
    if outline.is_area() {
        scene.block_fills.push(SceneBlockFill {
            block_id: block.id,
            polygon: outline.points,
            selected,
            hovered,
        });
    }
}

/// Segmente tragen ihre ID, Sewings ihre Länge.
fn label_for(block: &Block, entity: &Entity) -> SceneLabel {
    let text = match entity {
        Entity::Segment(segment) => format!("#{}", segment.id),
        Entity::Sewing(sewing) => format!("{:.1}px", arc_length(&sewing.vertexes)),
    };
    SceneLabel {
        block_id: block.id,
        entity_id: entity.id(),
        position: centroid(entity.vertexes()),
        text,
    }
}

fn arrow_for(block: &Block, entity: &Entity, arrow_ratio: f32) -> Option<SceneArrow> {
    let sewing = entity.as_sewing()?;
    let length = arc_length(&sewing.vertexes);
    let sample = point_and_tangent_at_arc_length(&sewing.vertexes, length * arrow_ratio)?;
    let direction = block
        .segment(sewing.segment_id)
        .map(|parent| classify(&parent.vertexes, &sewing.vertexes))
        .unwrap_or(Direction::Unknown);

    Some(SceneArrow {
        block_id: block.id,
        entity_id: sewing.id,
        position: sample.point,
        tangent: sample.tangent,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Block, Direction, Entity, Layer, RatioSpan, Segment, Sewing};
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn state_with_ring() -> AppState {
        let mut block = Block::with_entities(
            1,
            "Ring",
            [
                Entity::from(Segment {
                    id: 1,
                    kind: "edge".into(),
                    vertexes: vec![
                        Vec2::new(0.0, 0.0),
                        Vec2::new(10.0, 0.0),
                        Vec2::new(10.0, 10.0),
                        Vec2::new(0.0, 10.0),
                        Vec2::new(0.0, 0.0),
                    ],
                }),
                Entity::from(Sewing {
                    id: 2,
                    kind: "seam".into(),
                    vertexes: Vec::new(),
                    segment_id: 1,
                    ratio: RatioSpan::new(0.0, 0.5),
                }),
            ],
        );
        block.rebuild_sewings();
        let mut state = AppState::new();
        state.blocks = vec![block];
        state
    }

    #[test]
    fn scene_lists_entities_with_flags() {
        let mut state = state_with_ring();
        state.selection.select_entity(1, 2);
        state.hover.set_entity(Some((1, 1)));

        let scene = build(&state, [800.0, 600.0]);

        assert_eq!(scene.viewport_size, [800.0, 600.0]);
        assert_eq!(scene.polylines.len(), 2);
        let sewing = scene
            .polylines_on(Layer::Sewing)
            .next()
            .expect("Sewing-Linie erwartet");
        assert!(sewing.selected);
        assert!(!sewing.hovered);
        let segment = scene
            .polylines_on(Layer::Segment)
            .next()
            .expect("Segment-Linie erwartet");
        assert!(segment.hovered);
        assert!(scene.block_fills.is_empty());
    }

    #[test]
    fn arrow_sits_at_quarter_of_sewing_length() {
        let state = state_with_ring();

        let scene = build(&state, [0.0, 0.0]);

        assert_eq!(scene.arrows.len(), 1);
        let arrow = scene.arrows[0];
        // Sewing läuft (0,0) → (10,0) → (10,10), Länge 20
        assert_relative_eq!(arrow.position.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(arrow.position.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(arrow.tangent.x, 1.0, epsilon = 1e-4);
        assert_eq!(arrow.direction, Direction::Same);
    }

    #[test]
    fn labels_and_fill_for_hovered_block() {
        let mut state = state_with_ring();
        state.hover.set_block(Some(1));

        let scene = build(&state, [0.0, 0.0]);

        let texts: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["#1", "20.0px"]);
        assert_eq!(scene.block_fills.len(), 1);
        assert!(scene.block_fills[0].hovered);
    }
}

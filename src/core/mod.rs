//! Core-Domänentypen: Polyline-Geometrie, Ratio-Projektion, Blöcke, Drag-Solver, Kamera.

pub mod block;
pub mod camera;
pub mod direction;
pub mod drag;
/// Entity-Modell eines Blocks
///
/// - Segment: Polyline als Geometrie-Quelle
/// - Sewing: an ein Segment gebundene Teilkurve (Ratio als Wahrheit)
pub mod entity;
pub mod generate;
pub mod polygon;
pub mod polyline;
pub mod ratio;
pub mod sewing_builder;

pub use block::{rebuild_all_ratios, Block, Bounds, RebuildOutcome, RebuildReport};
pub use camera::Camera2D;
pub use direction::{classify, Direction};
pub use drag::{
    begin_drag, end_drag, update_drag, DragSession, DragState, SewingDrag, DEFAULT_ANCHOR_RATIO,
};
pub use entity::{BlockId, Entity, EntityId, Layer, Segment, Sewing};
pub use generate::{generate_blocks, generate_blocks_in_rows, BLOCKS_PER_ROW, DEFAULT_GAP};
pub use hit_test::{hit_test, Hit, HitThreshold};
pub use polygon::{assemble, AssembledPolygon};
pub use polyline::{ArcSample, PolylineParameter, CLOSED_CURVE_TOLERANCE};
pub use ratio::{RatioSpan, SeamHysteresis};
pub use sewing_builder::{build_vertexes, build_vertexes_from_ratio};

//! Pattern Sewing Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PointerButton, SelectionState, ViewState,
};
pub use core::{
    classify, hit_test, rebuild_all_ratios, Block, BlockId, Camera2D, Direction, Entity, EntityId,
    Hit, HitThreshold, Layer, RatioSpan, Segment, Sewing,
};
pub use json::{load_document, write_document, LoadReport, SchemaVersion};
pub use shared::{CursorHint, EditorOptions, RenderScene};

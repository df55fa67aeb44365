//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeiger-Intents werden hier über Hit-Test und Gesten-Zustand aufgelöst,
//! damit die Commands nur noch eindeutige Ziele tragen.

use super::events::PointerButton;
use super::state::PointerMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{hit_test, Hit};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::DocumentReceived { json } => vec![AppCommand::LoadDocument { json }],
        AppIntent::SaveRequested { path } => vec![AppCommand::SaveFile { path }],
        AppIntent::GenerateRequested { count, seed } => vec![AppCommand::GenerateBlocks {
            count,
            gap: state.options.generation_gap,
            seed,
        }],
        AppIntent::ResetRequested => vec![AppCommand::ResetBlocks, AppCommand::ResetCamera],
        AppIntent::RebuildSewingsRequested => vec![AppCommand::RebuildSewings],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::KeyPressed { key } => match key {
            '+' | '=' => vec![AppCommand::ZoomIn],
            '-' | '_' => vec![AppCommand::ZoomOut],
            '0' => vec![AppCommand::ResetCamera],
            _ => vec![],
        },
        AppIntent::Wheel {
            screen_pos,
            delta_y,
        } => {
            if delta_y == 0.0 || !delta_y.is_finite() {
                return vec![];
            }
            let factor = if delta_y > 0.0 {
                state.options.camera_zoom_step_reverse
            } else {
                state.options.camera_zoom_step
            };
            vec![AppCommand::ZoomTowards {
                factor,
                focus_screen: screen_pos,
            }]
        }
        AppIntent::PointerPressed { screen_pos, button } => {
            map_pointer_pressed(state, screen_pos, button)
        }
        AppIntent::PointerMoved { screen_pos } => {
            let world_pos = state.view.screen_to_world(screen_pos);
            match state.interaction.pointer {
                PointerMode::Panning { .. } => vec![AppCommand::PanTo { screen_pos }],
                PointerMode::BlockDrag { .. } => vec![AppCommand::DragBlockTo { world_pos }],
                PointerMode::Idle if state.interaction.sewing_drag.is_active() => {
                    vec![AppCommand::DragSewingTo { world_pos }]
                }
                PointerMode::Idle => vec![AppCommand::UpdateHover { world_pos }],
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndInteraction],
        AppIntent::Clicked { screen_pos, shift } => {
            let world_pos = state.view.screen_to_world(screen_pos);
            match hit_at(state, world_pos) {
                Hit::Sewing { block, entity } | Hit::Segment { block, entity } => {
                    vec![AppCommand::SelectEntity {
                        block_id: block,
                        entity_id: entity,
                        toggle: shift,
                    }]
                }
                Hit::Block { block } => vec![AppCommand::SelectBlock {
                    block_id: block,
                    toggle: shift,
                }],
                Hit::None if shift => vec![],
                Hit::None => vec![AppCommand::ClearSelection],
            }
        }
    }
}

/// Mittlere Taste → Pan, Sewing-Treffer → Sewing-Drag, Block-Innenfläche → Block-Drag.
fn map_pointer_pressed(
    state: &AppState,
    screen_pos: Vec2,
    button: PointerButton,
) -> Vec<AppCommand> {
    match button {
        PointerButton::Middle => vec![AppCommand::BeginPan { screen_pos }],
        PointerButton::Secondary => vec![],
        PointerButton::Primary => {
            let world_pos = state.view.screen_to_world(screen_pos);
            if let Hit::Sewing { block, entity } = hit_at(state, world_pos) {
                return vec![AppCommand::BeginSewingDrag {
                    block_id: block,
                    sewing_id: entity,
                    world_pos,
                }];
            }
            state
                .blocks
                .iter()
                .find(|b| b.contains_point(world_pos))
                .map(|b| {
                    vec![AppCommand::BeginBlockDrag {
                        block_id: b.id,
                        world_pos,
                    }]
                })
                .unwrap_or_default()
        }
    }
}

fn hit_at(state: &AppState, world_pos: Vec2) -> Hit {
    hit_test(
        world_pos,
        &state.blocks,
        state.view.camera.zoom,
        &state.options.hit_threshold(),
    )
}

#[cfg(test)]
mod tests;

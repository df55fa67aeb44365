//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Dokument ===
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::LoadDocument { json } => handlers::file_io::load_document(state, &json)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::GenerateBlocks { count, gap, seed } => {
                handlers::document::generate(state, count, gap, seed)
            }
            AppCommand::ResetBlocks => handlers::document::reset(state),
            AppCommand::RebuildSewings => handlers::document::rebuild(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ZoomTowards {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Zeiger-Gesten ===
            AppCommand::BeginPan { screen_pos } => {
                handlers::interaction::begin_pan(state, screen_pos)
            }
            AppCommand::PanTo { screen_pos } => handlers::interaction::pan_to(state, screen_pos),
            AppCommand::BeginBlockDrag {
                block_id,
                world_pos,
            } => handlers::interaction::begin_block_drag(state, block_id, world_pos),
            AppCommand::DragBlockTo { world_pos } => {
                handlers::interaction::drag_block_to(state, world_pos)
            }
            AppCommand::BeginSewingDrag {
                block_id,
                sewing_id,
                world_pos,
            } => handlers::interaction::begin_sewing_drag(state, block_id, sewing_id, world_pos),
            AppCommand::DragSewingTo { world_pos } => {
                handlers::interaction::drag_sewing_to(state, world_pos)
            }
            AppCommand::UpdateHover { world_pos } => {
                handlers::interaction::update_hover(state, world_pos)
            }
            AppCommand::EndInteraction => handlers::interaction::end(state),

            // === Selektion ===
            AppCommand::SelectEntity {
                block_id,
                entity_id,
                toggle,
            } => handlers::selection::select_entity(state, block_id, entity_id, toggle),
            AppCommand::SelectBlock { block_id, toggle } => {
                handlers::selection::select_block(state, block_id, toggle)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state, state.view.viewport_size)
    }
}

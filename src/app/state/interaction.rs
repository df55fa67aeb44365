use crate::core::{BlockId, SewingDrag};
use glam::Vec2;

/// Zeiger-Geste außerhalb des Sewing-Drags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PointerMode {
    #[default]
    Idle,
    /// Mittlere Maustaste: Ansicht verschieben
    Panning { last_screen: Vec2 },
    /// Block wird an seiner Innenfläche gezogen
    BlockDrag { block_id: BlockId, last_world: Vec2 },
}

/// Zustand der laufenden Zeiger-Geste (Pointer-Down bis Pointer-Up).
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub pointer: PointerMode,
    pub sewing_drag: SewingDrag,
}

impl InteractionState {
    /// Läuft irgendeine Geste?
    pub fn is_active(&self) -> bool {
        self.pointer != PointerMode::Idle || self.sewing_drag.is_active()
    }

    /// Verwirft jede laufende Geste.
    pub fn reset(&mut self) {
        self.pointer = PointerMode::Idle;
        self.sewing_drag.end();
    }
}

use crate::core::{BlockId, EntityId};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand.
///
/// Entweder Blöcke oder Entities sind selektiert, nie beides gleichzeitig.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Blöcke in Klick-Reihenfolge
    pub block_ids: IndexSet<BlockId>,
    /// Selektierte Entities als (Block, Entity) in Klick-Reihenfolge
    pub entity_ids: IndexSet<(BlockId, EntityId)>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.block_ids.is_empty() && self.entity_ids.is_empty()
    }

    pub fn is_block_selected(&self, id: BlockId) -> bool {
        self.block_ids.contains(&id)
    }

    pub fn is_entity_selected(&self, block_id: BlockId, entity_id: EntityId) -> bool {
        self.entity_ids.contains(&(block_id, entity_id))
    }

    /// Einzelauswahl eines Blocks (ersetzt alles).
    pub fn select_block(&mut self, id: BlockId) {
        self.entity_ids.clear();
        self.block_ids.clear();
        self.block_ids.insert(id);
    }

    /// Einzelauswahl einer Entity (ersetzt alles).
    pub fn select_entity(&mut self, block_id: BlockId, entity_id: EntityId) {
        self.block_ids.clear();
        self.entity_ids.clear();
        self.entity_ids.insert((block_id, entity_id));
    }

    /// Shift-Klick auf einen Block: Entity-Auswahl verwerfen, Block umschalten.
    pub fn toggle_block(&mut self, id: BlockId) {
        self.entity_ids.clear();
        if !self.block_ids.shift_remove(&id) {
            self.block_ids.insert(id);
        }
    }

    /// Shift-Klick auf eine Entity: Block-Auswahl verwerfen, Entity umschalten.
    pub fn toggle_entity(&mut self, block_id: BlockId, entity_id: EntityId) {
        self.block_ids.clear();
        let key = (block_id, entity_id);
        if !self.entity_ids.shift_remove(&key) {
            self.entity_ids.insert(key);
        }
    }

    pub fn clear(&mut self) {
        self.block_ids.clear();
        self.entity_ids.clear();
    }
}

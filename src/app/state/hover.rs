use crate::core::{BlockId, EntityId};

/// Hover-Zustand. Eine gehoverte Entity hat Vorrang vor dem Block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    pub block: Option<BlockId>,
    pub entity: Option<(BlockId, EntityId)>,
}

impl HoverState {
    /// Setzt die gehoverte Entity; eine Entity löscht den Block-Hover.
    pub fn set_entity(&mut self, entity: Option<(BlockId, EntityId)>) {
        self.entity = entity;
        if entity.is_some() {
            self.block = None;
        }
    }

    pub fn set_block(&mut self, block: Option<BlockId>) {
        self.block = block;
    }

    pub fn clear(&mut self) {
        self.block = None;
        self.entity = None;
    }

    pub fn is_block_hovered(&self, id: BlockId) -> bool {
        self.block == Some(id)
    }

    pub fn is_entity_hovered(&self, block_id: BlockId, entity_id: EntityId) -> bool {
        self.entity == Some((block_id, entity_id))
    }
}

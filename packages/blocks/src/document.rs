use crate::block::Block;
use crate::design::DesignSettings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Invariant violations surfaced by [`PageDocument::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("block {id} has order {found}, expected {expected}")]
    OrderMismatch {
        id: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate block id: {id}")]
    DuplicateId { id: String },
}

/// The ordered block sequence plus global design settings for one page.
///
/// Two invariants hold between mutations: every `blocks[i].order == i`,
/// and no two blocks share an id. The sequencer re-establishes the first
/// after each operation; the id generator guarantees the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub design: DesignSettings,
}

impl PageDocument {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            design: DesignSettings::default(),
        }
    }

    pub fn with_design(design: DesignSettings) -> Self {
        Self {
            blocks: Vec::new(),
            design,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Blocks the assembler will render, in document order.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.is_visible())
    }

    /// Re-check the order and id-uniqueness invariants.
    ///
    /// Meant for tests and debug assertions; the editing paths maintain
    /// both invariants structurally.
    pub fn validate(&self) -> DocumentResult<()> {
        let mut seen = HashSet::new();

        for (index, block) in self.blocks.iter().enumerate() {
            if block.order != index {
                return Err(DocumentError::OrderMismatch {
                    id: block.id.clone(),
                    expected: index,
                    found: block.order,
                });
            }
            if !seen.insert(block.id.as_str()) {
                return Err(DocumentError::DuplicateId {
                    id: block.id.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}

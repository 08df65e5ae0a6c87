//! # User Actions
//!
//! The serializable vocabulary of everything an author can do to a page.
//! One dispatched action becomes at most one history entry; actions
//! addressed to ids that no longer exist are no-ops.

use pagecraft_blocks::{BlockContent, BlockKind, BlockSettings};
use serde::{Deserialize, Serialize};

/// Semantic editing operations (intent-preserving)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Action {
    /// Add a new block of the given kind at the end of the page
    Add { kind: BlockKind },

    /// Remove a block
    Remove { id: String },

    /// Swap a block with the one above it
    MoveUp { id: String },

    /// Swap a block with the one below it
    MoveDown { id: String },

    /// Move a block to the top of the page
    MoveToTop { id: String },

    /// Move a block to the bottom of the page
    MoveToBottom { id: String },

    /// Drag-and-drop: drop a block onto another block's position
    Reorder { id: String, target_id: String },

    /// Clone a block under a fresh id, appended at the end
    Duplicate { id: String },

    /// Show or hide a block without removing it
    SetVisibility { id: String, visible: bool },

    /// Replace a block's content payload (same kind only)
    UpdateContent { id: String, content: BlockContent },

    /// Replace a block's presentation settings
    UpdateSettings { id: String, settings: BlockSettings },
}

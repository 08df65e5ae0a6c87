//! # Pagecraft Editor
//!
//! Authoring engine for the block-based page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: document model + registry           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: authoring session                   │
//! │  - Dispatch user actions                    │
//! │  - Sequence/reorder the block list          │
//! │  - Snapshot history (undo/redo)             │
//! │  - Bundle the save payload                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: blocks → standalone HTML          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Single mutation door**: every user action goes through
//!    [`EditSession::dispatch`] or [`EditSession::apply_edit`], which
//!    commit exactly one history entry per observable change
//! 2. **Total operations**: unknown ids and boundary moves are no-ops,
//!    never errors - a stray click cannot corrupt the session
//! 3. **Owned snapshots**: history entries deep-copy the block sequence;
//!    two snapshots never share mutable substructure
//! 4. **Explicit session state**: selection and the history cursor live in
//!    the session, not in ambient globals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_blocks::BlockKind;
//! use pagecraft_editor::{Action, EditSession, PageMeta};
//!
//! let mut session = EditSession::new("landing-home");
//!
//! session.dispatch(Action::Add { kind: BlockKind::Hero });
//! session.dispatch(Action::Add { kind: BlockKind::Packages });
//! session.undo();
//! session.redo();
//!
//! let meta = PageMeta::new("Umrah 2027", "Guided groups, every season");
//! let record = session.save_record(&meta);
//! ```

pub mod actions;
pub mod errors;
pub mod history;
pub mod sequence;
pub mod session;

pub use actions::Action;
pub use errors::EditorError;
pub use history::History;
pub use sequence::{Direction, Edge};
pub use session::EditSession;

// Re-export common types for convenience
pub use pagecraft_blocks::{Block, BlockKind, DesignSettings, PageDocument, PageRecord};
pub use pagecraft_renderer::PageMeta;

//! # Edit Session
//!
//! One author editing one page. The session owns the document, the
//! snapshot history, the block factory and the selection state, and
//! funnels every mutation through [`EditSession::dispatch`] - the single
//! place where a change becomes durable.
//!
//! ## Lifecycle
//!
//! ```text
//! Open → Dispatch/Edit → Undo/Redo → Save
//!   ↓         ↓              ↓         ↓
//! Record   Sequence      Snapshots  Record
//! ```
//!
//! Dispatch clones the current sequence, applies the operation, and only
//! commits when the result observably differs. No-op actions (unknown
//! ids, boundary moves, same-value updates) never spend an undo slot.

use crate::actions::Action;
use crate::errors::EditorError;
use crate::history::History;
use crate::sequence::{self, Direction, Edge};
use pagecraft_blocks::{Block, BlockFactory, DesignSettings, PageDocument, PageRecord};
use pagecraft_renderer::{render_page, PageMeta};
use tracing::debug;

/// Single-author editing session for one page.
pub struct EditSession {
    page_id: String,
    document: PageDocument,
    history: History,
    factory: BlockFactory,

    /// Block the editing surface currently focuses, if any.
    selected: Option<String>,
}

impl EditSession {
    /// Start a session on a brand-new, empty page.
    pub fn new(page_id: &str) -> Self {
        let document = PageDocument::new();
        let history = History::new(&document.blocks);

        Self {
            page_id: page_id.to_string(),
            document,
            history,
            factory: BlockFactory::new(page_id),
            selected: None,
        }
    }

    /// Resume editing a stored page.
    ///
    /// Block order is renormalized (stores are not trusted to keep it
    /// contiguous), the id counter continues past every stored id, and the
    /// stored sequence seeds history entry 0. A record carrying duplicate
    /// block ids is rejected: letting one in would corrupt every later
    /// edit.
    pub fn open(page_id: &str, record: PageRecord) -> Result<Self, EditorError> {
        let blocks = sequence::renormalize(record.blocks);
        let document = PageDocument {
            blocks,
            design: record.design_settings,
        };
        document.validate()?;

        let factory = BlockFactory::resume(page_id, document.blocks.iter().map(|b| b.id.as_str()));
        let history = History::new(&document.blocks);

        debug!(page_id = %page_id, blocks = document.blocks.len(), "Opened stored page");

        Ok(Self {
            page_id: page_id.to_string(),
            document,
            history,
            factory,
            selected: None,
        })
    }

    /// Resume editing straight from the store's JSON payload.
    pub fn open_json(page_id: &str, json: &str) -> Result<Self, EditorError> {
        let record = PageRecord::from_json(json)?;
        Self::open(page_id, record)
    }

    /// Apply one user action.
    ///
    /// Returns whether the document changed; only changed dispatches are
    /// committed to history. Adding a block also selects it, matching the
    /// editing surface's focus-on-insert behavior.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(action = ?action, "Dispatching action");

        let current = self.document.blocks.clone();
        let mut select_after = None;

        let next = match action {
            Action::Add { kind } => {
                let block = self.factory.create(kind);
                select_after = Some(block.id.clone());
                sequence::append(current, block)
            }
            Action::Remove { id } => sequence::remove(current, &id),
            Action::MoveUp { id } => sequence::move_adjacent(current, &id, Direction::Up),
            Action::MoveDown { id } => sequence::move_adjacent(current, &id, Direction::Down),
            Action::MoveToTop { id } => sequence::move_to_edge(current, &id, Edge::Top),
            Action::MoveToBottom { id } => sequence::move_to_edge(current, &id, Edge::Bottom),
            Action::Reorder { id, target_id } => sequence::reorder_to(current, &id, &target_id),
            Action::Duplicate { id } => sequence::duplicate(current, &id, &mut self.factory),
            Action::SetVisibility { id, visible } => Self::update_block(current, &id, |block| {
                block.settings.is_visible = visible;
            }),
            Action::UpdateContent { id, content } => Self::update_block(current, &id, |block| {
                // Kind is fixed at creation; a payload of a different kind
                // cannot replace this block's content.
                if content.tag() == block.content.tag() {
                    block.content = content;
                }
            }),
            Action::UpdateSettings { id, settings } => Self::update_block(current, &id, |block| {
                block.settings = settings;
            }),
        };

        if next == self.document.blocks {
            return false;
        }

        self.document.blocks = next;
        self.history.commit(&self.document.blocks);

        if let Some(id) = select_after {
            self.selected = Some(id);
        }
        self.sync_selection();

        debug!(blocks = self.document.blocks.len(), "Committed action");
        true
    }

    /// Boundary for type-specific editing forms.
    ///
    /// The edit receives a copy of the block and returns its replacement.
    /// Identity and position are pinned: `id` and `order` are restored
    /// from the original, and a replacement that switches kind is
    /// discarded, so only content and settings can change through this
    /// path. A changed result is committed as one history entry.
    ///
    /// Editing an id that no longer exists is a no-op: a form can race
    /// against removal without harm.
    pub fn apply_edit(&mut self, id: &str, edit: impl FnOnce(Block) -> Block) -> bool {
        let index = match self.document.position(id) {
            Some(index) => index,
            None => return false,
        };

        let original = self.document.blocks[index].clone();
        let mut replacement = edit(original.clone());

        replacement.id = original.id.clone();
        replacement.order = original.order;
        if replacement.content.tag() != original.content.tag() {
            return false;
        }

        if replacement == original {
            return false;
        }

        self.document.blocks[index] = replacement;
        self.history.commit(&self.document.blocks);
        debug!(block_id = id, "Applied block edit");
        true
    }

    /// Step the document back one committed change.
    ///
    /// Returns whether anything was restored. Selection survives when the
    /// selected block exists in the restored snapshot and is dropped
    /// otherwise.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.document.blocks = snapshot.to_vec();
                self.sync_selection();
                true
            }
            None => false,
        }
    }

    /// Step the document forward one undone change.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.document.blocks = snapshot.to_vec();
                self.sync_selection();
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the whole page theme.
    ///
    /// Design changes bypass history: undo and redo only ever touch the
    /// block sequence.
    pub fn set_design(&mut self, design: DesignSettings) {
        self.document.design = design;
    }

    pub fn set_primary_color(&mut self, color: impl Into<String>) {
        self.document.design.primary_color = color.into();
    }

    pub fn set_font_family(&mut self, font: impl Into<String>) {
        self.document.design.font_family = font.into();
    }

    pub fn set_border_radius(&mut self, radius: u32) {
        self.document.design.border_radius = radius;
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.document.design.animations_enabled = enabled;
    }

    /// Focus a block in the editing surface.
    ///
    /// Selecting an id that is not in the document clears the selection
    /// instead of leaving it pointing at nothing.
    pub fn select(&mut self, id: &str) {
        self.selected = if self.document.block(id).is_some() {
            Some(id.to_string())
        } else {
            None
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently focused block id, if it still exists.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Assemble the page and bundle everything the external store needs:
    /// the raw block sequence and design settings for re-editing, plus the
    /// rendered HTML the public site serves.
    pub fn save_record(&self, meta: &PageMeta) -> PageRecord {
        PageRecord {
            blocks: self.document.blocks.clone(),
            design_settings: self.document.design.clone(),
            rendered_html: render_page(&self.document, meta),
        }
    }

    /// Live preview of the current document.
    pub fn preview_html(&self, meta: &PageMeta) -> String {
        render_page(&self.document, meta)
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn blocks(&self) -> &[Block] {
        &self.document.blocks
    }

    pub fn design(&self) -> &DesignSettings {
        &self.document.design
    }

    fn update_block(mut blocks: Vec<Block>, id: &str, f: impl FnOnce(&mut Block)) -> Vec<Block> {
        if let Some(block) = blocks.iter_mut().find(|block| block.id == id) {
            f(block);
        }
        blocks
    }

    /// Drop the selection when the block it points at is gone (removed,
    /// undone away, or absent from a restored snapshot).
    fn sync_selection(&mut self) {
        if let Some(id) = &self.selected {
            if self.document.block(id).is_none() {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_blocks::BlockKind;

    #[test]
    fn test_new_session_is_empty() {
        let session = EditSession::new("landing-home");

        assert_eq!(session.page_id(), "landing-home");
        assert!(session.blocks().is_empty());
        assert!(session.selected().is_none());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_add_appends_selects_and_commits() {
        let mut session = EditSession::new("landing-home");

        let changed = session.dispatch(Action::Add {
            kind: BlockKind::Hero,
        });

        assert!(changed);
        assert_eq!(session.blocks().len(), 1);
        assert_eq!(session.selected(), Some(session.blocks()[0].id.as_str()));
        assert!(session.can_undo());
    }

    #[test]
    fn test_selecting_unknown_id_clears_selection() {
        let mut session = EditSession::new("landing-home");
        session.dispatch(Action::Add {
            kind: BlockKind::Faq,
        });

        session.select("not-a-block");
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_design_setters_do_not_touch_history() {
        let mut session = EditSession::new("landing-home");
        session.set_primary_color("#b45309");
        session.set_border_radius(4);

        assert_eq!(session.design().primary_color, "#b45309");
        assert!(!session.can_undo());
    }
}

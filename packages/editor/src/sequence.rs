//! # Block Sequencing
//!
//! Pure reorder operations over the block sequence. Every operation takes
//! the sequence by value and returns the new one, renormalizing the
//! `order` field as its final step so `blocks[i].order == i` holds after
//! each call.
//!
//! All operations are total: an id that is not in the sequence, or a move
//! already sitting at its boundary, returns the sequence unchanged. The
//! editing surface can race against block removal without ever seeing an
//! error.

use pagecraft_blocks::{Block, BlockFactory};

/// Direction for single-step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Target of a move-to-edge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Rewrite every `order` field to match sequence position.
///
/// The single source of truth for `order`; every operation in this module
/// ends with it.
pub fn renormalize(mut blocks: Vec<Block>) -> Vec<Block> {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = index;
    }
    blocks
}

/// Append a block at the end of the sequence.
pub fn append(mut blocks: Vec<Block>, block: Block) -> Vec<Block> {
    blocks.push(block);
    renormalize(blocks)
}

/// Remove the block with the given id; survivors keep their relative order.
pub fn remove(mut blocks: Vec<Block>, id: &str) -> Vec<Block> {
    blocks.retain(|block| block.id != id);
    renormalize(blocks)
}

/// Swap a block with its neighbor in the given direction.
pub fn move_adjacent(mut blocks: Vec<Block>, id: &str, direction: Direction) -> Vec<Block> {
    if let Some(index) = position(&blocks, id) {
        match direction {
            Direction::Up if index > 0 => blocks.swap(index, index - 1),
            Direction::Down if index + 1 < blocks.len() => blocks.swap(index, index + 1),
            _ => {}
        }
    }
    renormalize(blocks)
}

/// Splice a block out and reinsert it at the top or bottom.
pub fn move_to_edge(mut blocks: Vec<Block>, id: &str, edge: Edge) -> Vec<Block> {
    if let Some(index) = position(&blocks, id) {
        let block = blocks.remove(index);
        match edge {
            Edge::Top => blocks.insert(0, block),
            Edge::Bottom => blocks.push(block),
        }
    }
    renormalize(blocks)
}

/// Drag-and-drop relocation: the dragged block takes the target's former
/// index, every untouched block keeps its relative order.
///
/// Dropping a block onto itself is a no-op.
pub fn reorder_to(mut blocks: Vec<Block>, id: &str, target_id: &str) -> Vec<Block> {
    if id != target_id {
        if let (Some(from), Some(to)) = (position(&blocks, id), position(&blocks, target_id)) {
            let block = blocks.remove(from);
            let insert_index = to.min(blocks.len());
            blocks.insert(insert_index, block);
        }
    }
    renormalize(blocks)
}

/// Deep-clone a block under a fresh id and append the copy at the end.
///
/// The copy never lands next to its source: a duplicated section goes to
/// the bottom of the page, where the author drags it into place.
pub fn duplicate(mut blocks: Vec<Block>, id: &str, factory: &mut BlockFactory) -> Vec<Block> {
    if let Some(index) = position(&blocks, id) {
        let mut copy = blocks[index].clone();
        copy.id = factory.new_id();
        blocks.push(copy);
    }
    renormalize(blocks)
}

fn position(blocks: &[Block], id: &str) -> Option<usize> {
    blocks.iter().position(|block| block.id == id)
}

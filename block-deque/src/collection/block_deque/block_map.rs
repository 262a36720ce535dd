use crate::collection::{BlockDequeError, block_deque::position::Position};
use alloc::{boxed::Box, vec::Vec};
use core::{iter, mem, num::NonZeroUsize};

type Block<T> = Box<[Option<T>]>;

/// Ordered sequence of lazily allocated blocks.
//
// # Illustration
//
// | None | [. . . A B] | [C D E . .] | None | None |
//              |                 |
//              |                 |--> right = (2, 1)
//              |
//              |--------------------> left = (1, 3)
#[derive(Clone)]
pub(crate) struct BlockMap<T> {
  block_size: NonZeroUsize,
  blocks: Vec<Option<Block<T>>>,
}

impl<T> BlockMap<T> {
  pub(crate) fn new(block_size: NonZeroUsize, blocks_len: usize) -> Self {
    Self { block_size, blocks: iter::repeat_with(|| None).take(blocks_len).collect() }
  }

  /// Number of blocks that are currently allocated.
  pub(crate) fn allocated(&self) -> usize {
    self.blocks.iter().filter(|elem| elem.is_some()).count()
  }

  /// Drops every element while keeping all allocated blocks.
  pub(crate) fn clear(&mut self) {
    for block in self.blocks.iter_mut().flatten() {
      for slot in block.iter_mut() {
        *slot = None;
      }
    }
  }

  pub(crate) fn get(&self, pos: Position) -> Option<&T> {
    self.blocks.get(pos.block)?.as_ref()?.get(pos.slot)?.as_ref()
  }

  pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
    self.slot_mut(pos)?.as_mut()
  }

  /// Copies all blocks into the middle of a map `factor` times larger. Returns the number of
  /// blocks every position was shifted.
  pub(crate) fn grow(&mut self, factor: usize) -> crate::Result<usize> {
    let prev_len = self.blocks.len();
    let curr_len = prev_len.checked_mul(factor).ok_or(BlockDequeError::ReserveOverflow)?;
    let shift = middle_offset(curr_len, factor);
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(curr_len).map_err(|_err| BlockDequeError::ReserveOverflow)?;
    blocks.resize_with(shift, || None);
    blocks.append(&mut self.blocks);
    blocks.resize_with(curr_len, || None);
    self.blocks = blocks;
    Ok(shift)
  }

  pub(crate) fn len(&self) -> usize {
    self.blocks.len()
  }

  /// Writes `value` into the slot pointed by `pos`, allocating its block if absent.
  pub(crate) fn put(&mut self, pos: Position, value: T) -> crate::Result<()> {
    let blocks_len = self.blocks.len();
    let Some(local_block) = self.blocks.get_mut(pos.block) else {
      return Err(BlockDequeError::OutOfBoundsBlock { block: pos.block, blocks_len }.into());
    };
    let block = match local_block {
      Some(elem) => elem,
      elem @ None => elem.insert(new_block(self.block_size)?),
    };
    let Some(slot) = block.get_mut(pos.slot) else {
      return Err(BlockDequeError::OutOfBoundsBlock { block: pos.block, blocks_len }.into());
    };
    *slot = Some(value);
    Ok(())
  }

  /// Copies the blocks in `first..=last` into the middle of a map `factor` times smaller.
  ///
  /// Returns the new index of `first` or `None` if the live range does not fit or if the
  /// smaller map could not be allocated, in which case nothing is modified.
  pub(crate) fn shrink(&mut self, first: usize, last: usize, factor: usize) -> Option<usize> {
    let curr_len = self.blocks.len() / factor;
    let begin = middle_offset(curr_len, factor);
    let span = last.checked_sub(first)?;
    if last >= self.blocks.len() || begin.wrapping_add(span) >= curr_len {
      return None;
    }
    let mut blocks = Vec::new();
    blocks.try_reserve_exact(curr_len).ok()?;
    blocks.resize_with(begin, || None);
    blocks.extend(self.blocks.drain(first..=last));
    blocks.resize_with(curr_len, || None);
    self.blocks = blocks;
    Some(begin)
  }

  /// Swaps the contents of two slots. Does nothing if any of them does not exist.
  pub(crate) fn swap(&mut self, a: Position, b: Position) {
    if a == b {
      return;
    }
    let Some(lhs) = self.slot_mut(a).map(Option::take) else {
      return;
    };
    let rhs = match self.slot_mut(b) {
      Some(slot) => mem::replace(slot, lhs),
      None => lhs,
    };
    if let Some(slot) = self.slot_mut(a) {
      *slot = rhs;
    }
  }

  /// Removes the element pointed by `pos`.
  pub(crate) fn take(&mut self, pos: Position) -> Option<T> {
    self.slot_mut(pos)?.take()
  }

  fn slot_mut(&mut self, pos: Position) -> Option<&mut Option<T>> {
    self.blocks.get_mut(pos.block)?.as_mut()?.get_mut(pos.slot)
  }
}

/// Index where the previous contents start when a map is resized to `len` blocks. With a
/// factor of 3 this is the beginning of the middle third.
fn middle_offset(len: usize, factor: usize) -> usize {
  (len / factor).wrapping_mul(factor.wrapping_sub(1) / 2)
}

fn new_block<T>(block_size: NonZeroUsize) -> crate::Result<Block<T>> {
  let mut slots = Vec::new();
  slots.try_reserve_exact(block_size.get()).map_err(|_err| BlockDequeError::ReserveOverflow)?;
  slots.resize_with(block_size.get(), || None);
  Ok(slots.into_boxed_slice())
}

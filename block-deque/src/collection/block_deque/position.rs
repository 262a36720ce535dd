use core::num::NonZeroUsize;

/// Physical location of a slot inside the block map.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Position {
  /// Index of the block inside the map.
  pub(crate) block: usize,
  /// Index of the slot inside the block.
  pub(crate) slot: usize,
}

impl Position {
  pub(crate) const fn new(block: usize, slot: usize) -> Self {
    Self { block, slot }
  }

  /// Middle slot of the middle block of a map with `blocks_len` blocks.
  pub(crate) const fn centre(block_size: NonZeroUsize, blocks_len: usize) -> Self {
    Self::new(blocks_len / 2, block_size.get() / 2)
  }

  /// Physical position of the logical index `idx` when `self` is the position of the logical
  /// index `0`.
  ///
  /// Every translation from logical indices to slots must go through this method.
  pub(crate) fn offset(self, block_size: NonZeroUsize, idx: usize) -> Self {
    let mut block = self.block.wrapping_add(idx / block_size);
    let mut slot = self.slot.wrapping_add(idx % block_size);
    if slot >= block_size.get() {
      block = block.wrapping_add(1);
      slot = slot.wrapping_sub(block_size.get());
    }
    Self { block, slot }
  }

  /// The following slot. The returned block can be equal to the map length.
  pub(crate) fn next(self, block_size: NonZeroUsize) -> Self {
    self.offset(block_size, 1)
  }

  /// The preceding slot or `None` if `self` is the first slot of the first block.
  pub(crate) const fn prev(self, block_size: NonZeroUsize) -> Option<Self> {
    if let Some(slot) = self.slot.checked_sub(1) {
      return Some(Self::new(self.block, slot));
    }
    match self.block.checked_sub(1) {
      Some(block) => Some(Self::new(block, block_size.get().wrapping_sub(1))),
      None => None,
    }
  }

  /// Same slot in a block located `shift` blocks to the right.
  pub(crate) const fn shifted(self, shift: usize) -> Self {
    Self::new(self.block.wrapping_add(shift), self.slot)
  }
}

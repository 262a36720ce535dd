use crate::collection::BlockDequeError;
use core::num::NonZeroUsize;

const DEFAULT_BLOCK_SIZE: usize = 5;
const DEFAULT_FACTOR: usize = 3;
const DEFAULT_SHRINK_RATIO: usize = 9;

/// Construction parameters of [`crate::collection::BlockDeque`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DequeParams {
  /// Number of elements stored by each block. Must be greater than zero.
  pub block_size: usize,
  /// See [`ResizePolicy`].
  pub policy: ResizePolicy,
}

impl DequeParams {
  /// Default parameters: blocks of 5 elements and [`ResizePolicy::DEFAULT`].
  pub const DEFAULT: Self = Self::new(DEFAULT_BLOCK_SIZE);

  /// Parameters with a custom block size and the default resize policy.
  #[inline]
  pub const fn new(block_size: usize) -> Self {
    Self { block_size, policy: ResizePolicy::DEFAULT }
  }

  /// Replaces the resize policy.
  #[inline]
  #[must_use]
  pub const fn with_policy(mut self, policy: ResizePolicy) -> Self {
    self.policy = policy;
    self
  }

  pub(crate) fn block_size(&self) -> crate::Result<NonZeroUsize> {
    Ok(NonZeroUsize::new(self.block_size).ok_or(BlockDequeError::InvalidBlockSize)?)
  }
}

impl Default for DequeParams {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// How the block map grows and shrinks.
///
/// The map is multiplied by `factor` when a cursor reaches one of its ends and is divided by
/// `factor` when the blocks between both cursors occupy at most `1 / shrink_ratio` of it. Any
/// valid combination keeps pushes and pops amortized `O(1)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResizePolicy {
  factor: usize,
  shrink_ratio: usize,
}

impl ResizePolicy {
  /// Triples the map and shrinks it when the live blocks are within a ninth of its length.
  pub const DEFAULT: Self = Self { factor: DEFAULT_FACTOR, shrink_ratio: DEFAULT_SHRINK_RATIO };

  /// Validates and creates a new instance.
  ///
  /// `factor` must be at least 3 so that a grown map has free blocks at both ends and
  /// `shrink_ratio` must be at least `factor²` so that the live blocks fit in the middle of a
  /// shrunk map.
  #[inline]
  pub fn new(factor: usize, shrink_ratio: usize) -> crate::Result<Self> {
    let min_ratio = factor.checked_mul(factor).ok_or(BlockDequeError::InvalidResizePolicy)?;
    if factor < 3 || shrink_ratio < min_ratio {
      return Err(BlockDequeError::InvalidResizePolicy.into());
    }
    Ok(Self { factor, shrink_ratio })
  }

  /// Multiplier applied when growing and divisor applied when shrinking.
  #[inline]
  pub const fn factor(&self) -> usize {
    self.factor
  }

  /// Inverse of the maximum fraction of the map that live blocks can span before a shrink.
  #[inline]
  pub const fn shrink_ratio(&self) -> usize {
    self.shrink_ratio
  }
}

impl Default for ResizePolicy {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

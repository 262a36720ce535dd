// 1. Layout
//
// Elements live in fixed-size blocks that are referenced by a map. Blocks are only allocated
// when a cursor reaches them and both cursors start in the middle of the map so that growing to
// the left or to the right costs the same.
//
// | None | [. . . A B] | [C D E . .] | None | None |
//                  L             R
//
// 2. Growth
//
// When a cursor would leave the map, the map is multiplied by the policy factor and its previous
// contents are placed in the middle.
//
// |  A  |  B  |  C  |
// -------------------------------------------------
// |     |     |     |  A  |  B  |  C  |     |     |     |
//
// 3. Shrink
//
// After a removal, if the blocks between both cursors span at most `1 / shrink_ratio` of the map,
// these blocks are moved into the middle of a map divided by the policy factor.

mod block_map;
mod iter;
#[cfg(kani)]
mod kani;
mod position;
#[cfg(test)]
mod tests;

use crate::collection::{
  Cursor, DequeParams, ResizePolicy, Reversed, Sequence, SequenceMut, Stamp,
  block_deque::{block_map::BlockMap, position::Position},
};
use core::{
  cell::Cell,
  cmp::Ordering,
  fmt::{Debug, Formatter},
  num::NonZeroUsize,
  ops::{Index, IndexMut},
  sync::atomic::{self, AtomicUsize},
};
pub use iter::{IntoIter, Iter};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Errors of [`BlockDeque`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockDequeError {
  /// Operation requires at least one element
  EmptyContainer,
  /// The destination of a copy does not have enough room after the provided offset
  InvalidCopyRange {
    /// Length of the destination
    destination_len: usize,
    /// Starting index in the destination
    offset: usize,
    /// Number of elements to copy
    len: usize,
  },
  /// Blocks must hold at least one element
  InvalidBlockSize,
  /// See [`ResizePolicy::new`].
  InvalidResizePolicy,
  /// A copy was requested without a destination
  MissingDestination,
  /// A position pointed outside the block map
  OutOfBoundsBlock {
    /// Requested block
    block: usize,
    /// Number of blocks in the map
    blocks_len: usize,
  },
  #[doc = doc_out_of_bounds_index!()]
  OutOfBoundsIndex {
    /// Requested index
    idx: usize,
    /// Number of elements
    len: usize,
  },
  #[doc = doc_reserve_overflow!()]
  ReserveOverflow,
  /// A slot that should store a live element was empty
  VacantSlot,
}

/// A double-ended queue backed by a map of fixed-size blocks.
///
/// Pushes and pops at both ends are amortized `O(1)`, indexed access is `O(1)` and
/// [`BlockDeque::reverse`] provides a view in the opposite direction without copying.
///
/// ```rust
/// use block_deque::collection::BlockDeque;
///
/// let mut deque = BlockDeque::new();
/// deque.push_right(2).unwrap();
/// deque.push_left(1).unwrap();
/// deque.push_right(3).unwrap();
/// assert_eq!(deque.get(0).unwrap(), &1);
/// assert_eq!(deque.pop_right().unwrap(), 3);
/// assert_eq!(deque.len(), 2);
/// ```
pub struct BlockDeque<T> {
  block_size: NonZeroUsize,
  generation: Cell<u64>,
  id: usize,
  left: Position,
  len: usize,
  map: BlockMap<T>,
  policy: ResizePolicy,
  right: Position,
}

impl<T> BlockDeque<T> {
  /// Creates a new empty instance with blocks of 5 elements.
  #[inline]
  pub fn new() -> Self {
    Self::from_parts(NonZeroUsize::MIN.saturating_add(4), ResizePolicy::DEFAULT)
  }

  /// Creates a new empty instance with the given number of elements per block.
  ///
  /// ```rust
  /// use block_deque::collection::BlockDeque;
  ///
  /// assert!(BlockDeque::<u8>::with_block_size(9).is_ok());
  /// assert!(BlockDeque::<u8>::with_block_size(0).is_err());
  /// ```
  #[inline]
  pub fn with_block_size(block_size: usize) -> crate::Result<Self> {
    Self::with_params(DequeParams::new(block_size))
  }

  /// Creates a new empty instance based on `params`.
  #[inline]
  pub fn with_params(params: DequeParams) -> crate::Result<Self> {
    Ok(Self::from_parts(params.block_size()?, params.policy))
  }

  /// Alias of [`Self::push_right`].
  #[inline]
  pub fn add(&mut self, value: T) -> crate::Result<()> {
    self.push_right(value)
  }

  /// Number of blocks that are currently allocated.
  #[inline]
  pub fn allocated_blocks(&self) -> usize {
    self.map.allocated()
  }

  /// Number of elements stored by each block.
  #[inline]
  pub fn block_size(&self) -> usize {
    self.block_size.get()
  }

  /// Number of blocks, allocated or not, referenced by the map.
  #[inline]
  pub fn blocks_len(&self) -> usize {
    self.map.len()
  }

  /// Removes all elements and moves both cursors back to the middle of the map. Allocated blocks
  /// are kept.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.push_right(1).unwrap();
  /// deque.clear();
  /// assert!(deque.is_empty());
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    let centre = Position::centre(self.block_size, self.map.len());
    self.map.clear();
    self.left = centre;
    self.len = 0;
    self.right = centre;
    self.touch();
  }

  /// If the deque holds an element equal to `value`.
  #[inline]
  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq,
  {
    self.index_of(value).is_some()
  }

  /// Clones every element, in order, into `destination` starting at `offset`.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.push_right(1).unwrap();
  /// deque.push_right(2).unwrap();
  /// let mut buffer = [0; 3];
  /// deque.copy_to(Some(&mut buffer[..]), 1).unwrap();
  /// assert_eq!(buffer, [0, 1, 2]);
  /// ```
  #[inline]
  pub fn copy_to(&self, destination: Option<&mut [T]>, offset: usize) -> crate::Result<()>
  where
    T: Clone,
  {
    copy_to(self.iter(), self.len, destination, offset)?;
    self.touch();
    Ok(())
  }

  /// Detached cursor that is invalidated by any subsequent modification.
  #[inline]
  pub fn cursor(&self) -> Cursor {
    Cursor::new(self.oriented_stamp(false))
  }

  /// Appends all elements of the iterator.
  #[inline]
  pub fn extend_right_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      self.push_right(elem)?;
    }
    Ok(())
  }

  /// Prepends all elements of the iterator. The last element of the iterator becomes the first
  /// element of the deque.
  #[inline]
  pub fn extend_left_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      self.push_left(elem)?;
    }
    Ok(())
  }

  /// Provides a reference to the element at the given index.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.push_right(1).unwrap();
  /// assert_eq!(deque.get(0).unwrap(), &1);
  /// assert!(deque.get(1).is_err());
  /// ```
  #[inline]
  pub fn get(&self, idx: usize) -> crate::Result<&T> {
    let pos = self.position(idx)?;
    Ok(self.map.get(pos).ok_or(BlockDequeError::VacantSlot)?)
  }

  /// Mutable version of [`Self::get`]. Counts as a modification.
  #[inline]
  pub fn get_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    let pos = self.position(idx)?;
    self.touch();
    Ok(self.map.get_mut(pos).ok_or(BlockDequeError::VacantSlot)?)
  }

  /// Index of the first element equal to `value`.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([4, 5, 6]).unwrap();
  /// assert_eq!(deque.index_of(&5), Some(1));
  /// assert_eq!(deque.index_of(&7), None);
  /// ```
  #[inline]
  pub fn index_of(&self, value: &T) -> Option<usize>
  where
    T: PartialEq,
  {
    self.index_of_by(value, |a, b| a == b)
  }

  /// Index of the first element that `eq` considers equal to `value`.
  #[inline]
  pub fn index_of_by(&self, value: &T, mut eq: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    self.iter().position(|elem| eq(elem, value))
  }

  /// Index of the first element that `cmp` orders as [`Ordering::Equal`] to `value`.
  #[inline]
  pub fn index_of_by_cmp(
    &self,
    value: &T,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
  ) -> Option<usize> {
    self.index_of_by(value, |a, b| cmp(a, b) == Ordering::Equal)
  }

  /// Places `value` at `idx` shifting all subsequent elements to the right.
  ///
  /// `0` is equivalent to [`Self::push_left`] and the current length is equivalent to
  /// [`Self::push_right`]. Any other index is `O(n)`.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([1, 3]).unwrap();
  /// deque.insert(1, 2).unwrap();
  /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
  /// ```
  #[inline]
  pub fn insert(&mut self, idx: usize, value: T) -> crate::Result<()> {
    if idx == 0 {
      return self.push_left(value);
    }
    if idx == self.len {
      return self.push_right(value);
    }
    let _ = self.position(idx)?;
    self.push_right(value)?;
    let mut curr = self.len.wrapping_sub(1);
    while curr > idx {
      let prev = curr.wrapping_sub(1);
      self.swap(prev, curr);
      curr = prev;
    }
    Ok(())
  }

  /// If there are no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns a left-to-right iterator.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.push_right(1).unwrap();
  /// deque.push_left(3).unwrap();
  /// let mut iter = deque.iter();
  /// assert_eq!(iter.next(), Some(&3));
  /// assert_eq!(iter.next(), Some(&1));
  /// assert_eq!(iter.next(), None);
  /// ```
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  /// Returns the number of elements.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Construction parameters.
  #[inline]
  pub fn params(&self) -> DequeParams {
    DequeParams::new(self.block_size.get()).with_policy(self.policy)
  }

  /// First element.
  #[inline]
  pub fn peek_left(&self) -> crate::Result<&T> {
    if self.len == 0 {
      return Err(BlockDequeError::EmptyContainer.into());
    }
    Ok(self.map.get(self.left).ok_or(BlockDequeError::VacantSlot)?)
  }

  /// Last element.
  #[inline]
  pub fn peek_right(&self) -> crate::Result<&T> {
    if self.len == 0 {
      return Err(BlockDequeError::EmptyContainer.into());
    }
    Ok(self.map.get(self.right).ok_or(BlockDequeError::VacantSlot)?)
  }

  /// Removes the first element.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([1, 2]).unwrap();
  /// assert_eq!(deque.pop_left().unwrap(), 1);
  /// assert_eq!(deque.pop_left().unwrap(), 2);
  /// assert!(deque.pop_left().is_err());
  /// ```
  #[inline]
  pub fn pop_left(&mut self) -> crate::Result<T> {
    let Some(new_len) = self.len.checked_sub(1) else {
      return Err(BlockDequeError::EmptyContainer.into());
    };
    let value = self.map.take(self.left).ok_or(BlockDequeError::VacantSlot)?;
    if new_len > 0 {
      self.left = self.left.next(self.block_size);
    }
    self.len = new_len;
    self.shrink_if_sparse();
    self.touch();
    Ok(value)
  }

  /// Removes the last element.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([1, 2]).unwrap();
  /// assert_eq!(deque.pop_right().unwrap(), 2);
  /// assert_eq!(deque.pop_right().unwrap(), 1);
  /// assert!(deque.pop_right().is_err());
  /// ```
  #[inline]
  pub fn pop_right(&mut self) -> crate::Result<T> {
    let Some(new_len) = self.len.checked_sub(1) else {
      return Err(BlockDequeError::EmptyContainer.into());
    };
    let value = self.map.take(self.right).ok_or(BlockDequeError::VacantSlot)?;
    if new_len > 0 {
      if let Some(elem) = self.right.prev(self.block_size) {
        self.right = elem;
      }
    }
    self.len = new_len;
    self.shrink_if_sparse();
    self.touch();
    Ok(value)
  }

  /// Prepends an element.
  #[inline]
  pub fn push_left(&mut self, value: T) -> crate::Result<()> {
    let pos = if self.len == 0 {
      self.left
    } else if let Some(elem) = self.left.prev(self.block_size) {
      elem
    } else {
      self.grow()?;
      self.left.prev(self.block_size).ok_or(BlockDequeError::ReserveOverflow)?
    };
    self.map.put(pos, value)?;
    self.left = pos;
    self.len = self.len.wrapping_add(1);
    self.touch();
    Ok(())
  }

  /// Appends an element.
  #[inline]
  pub fn push_right(&mut self, value: T) -> crate::Result<()> {
    let pos = if self.len == 0 {
      self.right
    } else {
      if self.right.next(self.block_size).block >= self.map.len() {
        self.grow()?;
      }
      self.right.next(self.block_size)
    };
    self.map.put(pos, value)?;
    self.right = pos;
    self.len = self.len.wrapping_add(1);
    self.touch();
    Ok(())
  }

  /// Removes the first element equal to `value`.
  #[inline]
  pub fn remove(&mut self, value: &T) -> crate::Result<Option<T>>
  where
    T: PartialEq,
  {
    let Some(idx) = self.index_of(value) else {
      return Ok(None);
    };
    Ok(Some(self.remove_at(idx)?))
  }

  /// Removes and returns the element at `idx` shifting all subsequent elements to the left.
  ///
  /// `0` is equivalent to [`Self::pop_left`] and the last index is equivalent to
  /// [`Self::pop_right`]. Any other index is `O(n)`.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([1, 2, 3]).unwrap();
  /// assert_eq!(deque.remove_at(1).unwrap(), 2);
  /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 3]);
  /// ```
  #[inline]
  pub fn remove_at(&mut self, idx: usize) -> crate::Result<T> {
    let _ = self.position(idx)?;
    if idx == 0 {
      return self.pop_left();
    }
    let last = self.len.wrapping_sub(1);
    for curr in idx..last {
      self.swap(curr, curr.wrapping_add(1));
    }
    self.pop_right()
  }

  /// Returns a view where left and right are swapped.
  ///
  /// Modifications made through the view are performed on this instance.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::new();
  /// deque.extend_right_from_iter([1, 2]).unwrap();
  /// let mut reversed = deque.reverse();
  /// assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), [2, 1]);
  /// block_deque::collection::SequenceMut::push_left(&mut reversed, 3).unwrap();
  /// assert_eq!(deque.peek_right().unwrap(), &3);
  /// ```
  #[inline]
  pub fn reverse(&mut self) -> Reversed<&mut Self> {
    Reversed::new(self)
  }

  /// Read-only version of [`Self::reverse`].
  #[inline]
  pub fn reversed(&self) -> Reversed<&Self> {
    Reversed::new(self)
  }

  /// Replaces the element at `idx`, returning the previous one.
  #[inline]
  pub fn set(&mut self, idx: usize, value: T) -> crate::Result<T> {
    Ok(core::mem::replace(self.get_mut(idx)?, value))
  }

  /// Identity of this instance when read left to right (`reversed == false`) or through a
  /// [`Reversed`] view.
  pub(crate) fn oriented_stamp(&self, reversed: bool) -> Stamp {
    Stamp::new(self.id, self.generation.get(), reversed)
  }

  /// Marks all existing cursors as outdated.
  pub(crate) fn touch(&self) {
    self.generation.set(self.generation.get().wrapping_add(1));
  }

  fn from_parts(block_size: NonZeroUsize, policy: ResizePolicy) -> Self {
    let blocks_len = block_size.get();
    let centre = Position::centre(block_size, blocks_len);
    Self {
      block_size,
      generation: Cell::new(0),
      id: next_id(),
      left: centre,
      len: 0,
      map: BlockMap::new(block_size, blocks_len),
      policy,
      right: centre,
    }
  }

  fn grow(&mut self) -> crate::Result<()> {
    let _prev_len = self.map.len();
    let shift = self.map.grow(self.policy.factor())?;
    self.left = self.left.shifted(shift);
    self.right = self.right.shifted(shift);
    _debug!(prev_len = _prev_len, curr_len = self.map.len(), "Block map has grown");
    Ok(())
  }

  fn position(&self, idx: usize) -> crate::Result<Position> {
    if idx >= self.len {
      return Err(BlockDequeError::OutOfBoundsIndex { idx, len: self.len }.into());
    }
    Ok(self.left.offset(self.block_size, idx))
  }

  fn shrink_if_sparse(&mut self) {
    let blocks_len = self.map.len();
    if blocks_len <= self.block_size.get() {
      return;
    }
    let span = self.right.block.wrapping_sub(self.left.block);
    if span > blocks_len / self.policy.shrink_ratio() {
      return;
    }
    let Some(first) = self.map.shrink(self.left.block, self.right.block, self.policy.factor())
    else {
      return;
    };
    self.left.block = first;
    self.right.block = first.wrapping_add(span);
    _debug!(prev_len = blocks_len, curr_len = self.map.len(), "Block map has shrunk");
  }

  /// Both indices must be in bounds.
  fn swap(&mut self, a: usize, b: usize) {
    let lhs = self.left.offset(self.block_size, a);
    let rhs = self.left.offset(self.block_size, b);
    self.map.swap(lhs, rhs);
  }
}

impl<T> Sequence for BlockDeque<T> {
  type Item = T;

  #[inline]
  fn copy_to(&self, destination: Option<&mut [T]>, offset: usize) -> crate::Result<()>
  where
    T: Clone,
  {
    BlockDeque::copy_to(self, destination, offset)
  }

  #[inline]
  fn stamp(&self) -> Stamp {
    self.oriented_stamp(false)
  }

  #[inline]
  fn get(&self, idx: usize) -> crate::Result<&T> {
    BlockDeque::get(self, idx)
  }

  #[inline]
  fn len(&self) -> usize {
    self.len
  }

  #[inline]
  fn peek_left(&self) -> crate::Result<&T> {
    BlockDeque::peek_left(self)
  }

  #[inline]
  fn peek_right(&self) -> crate::Result<&T> {
    BlockDeque::peek_right(self)
  }

  #[inline]
  fn index_of_by(&self, value: &T, eq: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    BlockDeque::index_of_by(self, value, eq)
  }
}

impl<T> SequenceMut for BlockDeque<T> {
  #[inline]
  fn clear(&mut self) {
    BlockDeque::clear(self);
  }

  #[inline]
  fn get_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    BlockDeque::get_mut(self, idx)
  }

  #[inline]
  fn insert(&mut self, idx: usize, value: T) -> crate::Result<()> {
    BlockDeque::insert(self, idx, value)
  }

  #[inline]
  fn pop_left(&mut self) -> crate::Result<T> {
    BlockDeque::pop_left(self)
  }

  #[inline]
  fn pop_right(&mut self) -> crate::Result<T> {
    BlockDeque::pop_right(self)
  }

  #[inline]
  fn push_left(&mut self, value: T) -> crate::Result<()> {
    BlockDeque::push_left(self, value)
  }

  #[inline]
  fn push_right(&mut self, value: T) -> crate::Result<()> {
    BlockDeque::push_right(self, value)
  }

  #[inline]
  fn remove_at(&mut self, idx: usize) -> crate::Result<T> {
    BlockDeque::remove_at(self, idx)
  }

  #[inline]
  fn set(&mut self, idx: usize, value: T) -> crate::Result<T> {
    BlockDeque::set(self, idx, value)
  }
}

impl<T> Clone for BlockDeque<T>
where
  T: Clone,
{
  #[inline]
  fn clone(&self) -> Self {
    Self {
      block_size: self.block_size,
      generation: Cell::new(0),
      id: next_id(),
      left: self.left,
      len: self.len,
      map: self.map.clone(),
      policy: self.policy,
      right: self.right,
    }
  }
}

impl<T> Debug for BlockDeque<T>
where
  T: Debug,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Default for BlockDeque<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Eq for BlockDeque<T> where T: Eq {}

impl<T> Index<usize> for BlockDeque<T> {
  type Output = T;

  #[inline]
  fn index(&self, idx: usize) -> &Self::Output {
    match self.get(idx) {
      Ok(elem) => elem,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T> IndexMut<usize> for BlockDeque<T> {
  #[inline]
  fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
    match self.get_mut(idx) {
      Ok(elem) => elem,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<T> PartialEq for BlockDeque<T>
where
  T: PartialEq,
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

fn next_id() -> usize {
  NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Shared by both orientations, `iter` must yield `len` elements in the desired order.
pub(crate) fn copy_to<'any, T>(
  iter: impl Iterator<Item = &'any T>,
  len: usize,
  destination: Option<&mut [T]>,
  offset: usize,
) -> crate::Result<()>
where
  T: Clone + 'any,
{
  let Some(local_destination) = destination else {
    return Err(BlockDequeError::MissingDestination.into());
  };
  let destination_len = local_destination.len();
  let fits = destination_len.checked_sub(offset).is_some_and(|available| available >= len);
  if !fits {
    return Err(BlockDequeError::InvalidCopyRange { destination_len, offset, len }.into());
  }
  for (to, from) in local_destination.iter_mut().skip(offset).zip(iter) {
    to.clone_from(from);
  }
  Ok(())
}

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::collection::BlockDeque;
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any, T> Arbitrary<'any> for BlockDeque<T>
  where
    T: Arbitrary<'any>,
  {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let block_size = u.int_in_range(1..=16)?;
      let mut this =
        Self::with_block_size(block_size).map_err(|_err| arbitrary::Error::IncorrectFormat)?;
      let len = u.arbitrary_len::<T>()?;
      for _ in 0..len {
        let value = T::arbitrary(u)?;
        let _rslt = if bool::arbitrary(u)? { this.push_left(value) } else { this.push_right(value) };
      }
      Ok(this)
    }
  }
}

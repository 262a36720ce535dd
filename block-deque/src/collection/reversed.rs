
use crate::collection::{
  BlockDeque, BlockDequeError, Reverse, Sequence, SequenceMut, Stamp, block_deque::copy_to,
};
use core::{
  iter::Rev,
  ops::{Deref, DerefMut, Index},
};

/// A view of a [`BlockDeque`] where left and right are swapped.
///
/// Holds a reference, never a copy. Every index `i` of the view is the index `len - 1 - i` of the
/// deque and every left operation is a right operation of the deque and vice versa.
///
/// `D` is either `&BlockDeque<T>` or `&mut BlockDeque<T>`, the latter also allows modifications.
#[derive(Debug)]
pub struct Reversed<D> {
  deque: D,
}

impl<D> Reversed<D> {
  /// Wraps `deque`.
  #[inline]
  pub const fn new(deque: D) -> Self {
    Self { deque }
  }

  /// Returns the original reference.
  ///
  /// ```rust
  /// let mut deque = block_deque::collection::BlockDeque::<u8>::new();
  /// let ptr: *const _ = &deque;
  /// assert!(core::ptr::eq(deque.reverse().reverse(), ptr));
  /// ```
  #[inline]
  pub fn reverse(self) -> D {
    self.deque
  }
}

impl<D, T> Reversed<D>
where
  D: Deref<Target = BlockDeque<T>>,
{
  /// Returns a left-to-right iterator of the view, which is a right-to-left iterator of the
  /// deque.
  #[inline]
  pub fn iter(&self) -> Rev<crate::collection::Iter<'_, T>> {
    self.deque.iter().rev()
  }

  fn mirror(&self, idx: usize) -> crate::Result<usize> {
    let len = self.deque.len();
    match len.checked_sub(1).and_then(|last| last.checked_sub(idx)) {
      Some(elem) => Ok(elem),
      None => Err(BlockDequeError::OutOfBoundsIndex { idx, len }.into()),
    }
  }
}

impl<D, T> Sequence for Reversed<D>
where
  D: Deref<Target = BlockDeque<T>>,
{
  type Item = T;

  #[inline]
  fn copy_to(&self, destination: Option<&mut [T]>, offset: usize) -> crate::Result<()>
  where
    T: Clone,
  {
    copy_to(self.iter(), self.deque.len(), destination, offset)?;
    self.deque.touch();
    Ok(())
  }

  #[inline]
  fn stamp(&self) -> Stamp {
    self.deque.oriented_stamp(true)
  }

  #[inline]
  fn get(&self, idx: usize) -> crate::Result<&T> {
    self.deque.get(self.mirror(idx)?)
  }

  #[inline]
  fn len(&self) -> usize {
    self.deque.len()
  }

  #[inline]
  fn peek_left(&self) -> crate::Result<&T> {
    self.deque.peek_right()
  }

  #[inline]
  fn peek_right(&self) -> crate::Result<&T> {
    self.deque.peek_left()
  }

  #[inline]
  fn index_of_by(&self, value: &T, mut eq: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    self.iter().position(|elem| eq(elem, value))
  }
}

impl<D, T> SequenceMut for Reversed<D>
where
  D: DerefMut<Target = BlockDeque<T>>,
{
  #[inline]
  fn clear(&mut self) {
    self.deque.clear();
  }

  #[inline]
  fn get_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    let local_idx = self.mirror(idx)?;
    self.deque.get_mut(local_idx)
  }

  #[inline]
  fn insert(&mut self, idx: usize, value: T) -> crate::Result<()> {
    let len = self.deque.len();
    let Some(local_idx) = len.checked_sub(idx) else {
      return Err(BlockDequeError::OutOfBoundsIndex { idx, len }.into());
    };
    self.deque.insert(local_idx, value)
  }

  #[inline]
  fn pop_left(&mut self) -> crate::Result<T> {
    self.deque.pop_right()
  }

  #[inline]
  fn pop_right(&mut self) -> crate::Result<T> {
    self.deque.pop_left()
  }

  #[inline]
  fn push_left(&mut self, value: T) -> crate::Result<()> {
    self.deque.push_right(value)
  }

  #[inline]
  fn push_right(&mut self, value: T) -> crate::Result<()> {
    self.deque.push_left(value)
  }

  #[inline]
  fn remove_at(&mut self, idx: usize) -> crate::Result<T> {
    let local_idx = self.mirror(idx)?;
    self.deque.remove_at(local_idx)
  }

  #[inline]
  fn set(&mut self, idx: usize, value: T) -> crate::Result<T> {
    let local_idx = self.mirror(idx)?;
    self.deque.set(local_idx, value)
  }
}

impl<D, T> Index<usize> for Reversed<D>
where
  D: Deref<Target = BlockDeque<T>>,
{
  type Output = T;

  #[inline]
  fn index(&self, idx: usize) -> &Self::Output {
    match self.get(idx) {
      Ok(elem) => elem,
      Err(err) => panic!("{err}"),
    }
  }
}

impl<'deque, T> Reverse for &'deque mut BlockDeque<T> {
  type Output = Reversed<&'deque mut BlockDeque<T>>;

  #[inline]
  fn reverse(self) -> Self::Output {
    Reversed::new(self)
  }
}

impl<D> Reverse for Reversed<D> {
  type Output = D;

  #[inline]
  fn reverse(self) -> Self::Output {
    self.deque
  }
}

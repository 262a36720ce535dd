use crate::collection::{Cursor, Stamp};
use core::cmp::Ordering;

/// Read-only contract of ordered containers that expose both ends and random access.
///
/// Implemented by [`crate::collection::BlockDeque`] and by [`crate::collection::Reversed`], which
/// allows generic code to work with both orientations of the same storage.
pub trait Sequence {
  /// Stored element
  type Item;

  /// Clones every element, in logical order, into `destination` starting at `offset`.
  ///
  /// Counts as a modification, therefore invalidates all existing cursors.
  fn copy_to(&self, destination: Option<&mut [Self::Item]>, offset: usize) -> crate::Result<()>
  where
    Self::Item: Clone;

  /// Identity of the underlying storage and orientation. Changes every time the storage is
  /// modified.
  fn stamp(&self) -> Stamp;

  /// Provides a reference to the element at the given index.
  fn get(&self, idx: usize) -> crate::Result<&Self::Item>;

  /// Returns the number of elements.
  fn len(&self) -> usize;

  /// First element.
  fn peek_left(&self) -> crate::Result<&Self::Item>;

  /// Last element.
  fn peek_right(&self) -> crate::Result<&Self::Item>;

  /// If the sequence holds an element equal to `value`.
  #[inline]
  fn contains(&self, value: &Self::Item) -> bool
  where
    Self::Item: PartialEq,
  {
    self.index_of(value).is_some()
  }

  /// Detached cursor that is invalidated by any subsequent modification.
  #[inline]
  fn cursor(&self) -> Cursor {
    Cursor::new(self.stamp())
  }

  /// Index of the first element equal to `value`.
  #[inline]
  fn index_of(&self, value: &Self::Item) -> Option<usize>
  where
    Self::Item: PartialEq,
  {
    self.index_of_by(value, |a, b| a == b)
  }

  /// Index of the first element that `eq` considers equal to `value`.
  #[inline]
  fn index_of_by(
    &self,
    value: &Self::Item,
    mut eq: impl FnMut(&Self::Item, &Self::Item) -> bool,
  ) -> Option<usize> {
    (0..self.len()).find(|idx| self.get(*idx).is_ok_and(|elem| eq(elem, value)))
  }

  /// Index of the first element that `cmp` orders as [`Ordering::Equal`] to `value`.
  #[inline]
  fn index_of_by_cmp(
    &self,
    value: &Self::Item,
    mut cmp: impl FnMut(&Self::Item, &Self::Item) -> Ordering,
  ) -> Option<usize> {
    self.index_of_by(value, |a, b| cmp(a, b) == Ordering::Equal)
  }

  /// If there are no elements.
  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Mutable contract of ordered containers that expose both ends and random access.
pub trait SequenceMut: Sequence {
  /// Removes all elements.
  fn clear(&mut self);

  /// Mutable version of [`Sequence::get`].
  fn get_mut(&mut self, idx: usize) -> crate::Result<&mut Self::Item>;

  /// Places `value` at `idx` shifting all subsequent elements. `idx` can be equal to the length.
  fn insert(&mut self, idx: usize, value: Self::Item) -> crate::Result<()>;

  /// Removes the first element.
  fn pop_left(&mut self) -> crate::Result<Self::Item>;

  /// Removes the last element.
  fn pop_right(&mut self) -> crate::Result<Self::Item>;

  /// Prepends an element.
  fn push_left(&mut self, value: Self::Item) -> crate::Result<()>;

  /// Appends an element.
  fn push_right(&mut self, value: Self::Item) -> crate::Result<()>;

  /// Removes and returns the element at `idx` shifting all subsequent elements.
  fn remove_at(&mut self, idx: usize) -> crate::Result<Self::Item>;

  /// Replaces the element at `idx`, returning the previous one.
  fn set(&mut self, idx: usize, value: Self::Item) -> crate::Result<Self::Item>;

  /// Removes the first element equal to `value`.
  #[inline]
  fn remove(&mut self, value: &Self::Item) -> crate::Result<Option<Self::Item>>
  where
    Self::Item: PartialEq,
  {
    let Some(idx) = self.index_of(value) else {
      return Ok(None);
    };
    Ok(Some(self.remove_at(idx)?))
  }
}

/// Types that can be seen in the opposite direction without copying.
pub trait Reverse {
  /// Mirrored type. Reversing it again must yield the original instance.
  type Output;

  /// See [`Reverse`].
  fn reverse(self) -> Self::Output;
}

use crate::collection::BlockDeque;
use core::iter::FusedIterator;

/// Borrowing iterator of [`BlockDeque`]. See [`BlockDeque::iter`].
#[derive(Debug)]
pub struct Iter<'deque, T> {
  back: usize,
  deque: &'deque BlockDeque<T>,
  front: usize,
}

impl<'deque, T> Iter<'deque, T> {
  pub(crate) fn new(deque: &'deque BlockDeque<T>) -> Self {
    Self { back: deque.len(), deque, front: 0 }
  }
}

impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self {
    Self { back: self.back, deque: self.deque, front: self.front }
  }
}

impl<'deque, T> DoubleEndedIterator for Iter<'deque, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.front >= self.back {
      return None;
    }
    self.back = self.back.wrapping_sub(1);
    self.deque.get(self.back).ok()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'deque, T> Iterator for Iter<'deque, T> {
  type Item = &'deque T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.front >= self.back {
      return None;
    }
    let elem = self.deque.get(self.front).ok();
    self.front = self.front.wrapping_add(1);
    elem
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.back.wrapping_sub(self.front);
    (len, Some(len))
  }
}

impl<'deque, T> IntoIterator for &'deque BlockDeque<T> {
  type IntoIter = Iter<'deque, T>;
  type Item = &'deque T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Owning iterator of [`BlockDeque`].
#[derive(Debug)]
pub struct IntoIter<T> {
  deque: BlockDeque<T>,
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    self.deque.pop_right().ok()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.deque.pop_left().ok()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.deque.len(), Some(self.deque.len()))
  }
}

impl<T> IntoIterator for BlockDeque<T> {
  type IntoIter = IntoIter<T>;
  type Item = T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IntoIter { deque: self }
  }
}

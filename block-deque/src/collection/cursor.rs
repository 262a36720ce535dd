use crate::collection::Sequence;

/// Errors of [`Cursor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorError {
  /// The sequence was modified after the cursor was created.
  IterationInvalidated,
  /// The cursor was created from a different deque or from the other orientation of the same
  /// deque.
  ForeignSequence,
  /// The cursor was already disposed.
  IteratorDisposed,
  /// The cursor is located before the first element or after the last element.
  NotPositioned,
}

/// See [`Cursor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorState {
  /// No call to [`Cursor::move_next`] was made since creation or the last reset.
  Created,
  /// Walking over the elements.
  Advancing,
  /// The sequence was modified. Terminal.
  Invalidated,
  /// Explicitly discarded. Terminal.
  Disposed,
}

/// Identity of a sequence at a given moment: the deque that stores the elements, the orientation
/// used to read them and the number of modifications the deque went through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stamp {
  deque_id: usize,
  generation: u64,
  reversed: bool,
}

impl Stamp {
  pub(crate) const fn new(deque_id: usize, generation: u64, reversed: bool) -> Self {
    Self { deque_id, generation, reversed }
  }
}

/// Forward cursor that fails after any modification of the sequence it was created from.
///
/// A cursor does not borrow its sequence, which must be provided to every method instead. The
/// sequence can therefore be modified while a cursor is alive and the next use of the cursor
/// reports [`CursorError::IterationInvalidated`]. Providing any other sequence, including the
/// reversed view of the originating deque, reports [`CursorError::ForeignSequence`].
///
/// ```rust
/// use block_deque::collection::{BlockDeque, Sequence};
///
/// let mut deque = BlockDeque::new();
/// deque.push_right(1).unwrap();
/// deque.push_right(2).unwrap();
/// let mut cursor = deque.cursor();
/// assert_eq!(cursor.move_next(&deque).unwrap(), true);
/// assert_eq!(cursor.current(&deque).unwrap(), &1);
/// deque.push_right(3).unwrap();
/// assert!(cursor.move_next(&deque).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
  position: Option<usize>,
  stamp: Stamp,
  state: CursorState,
}

impl Cursor {
  pub(crate) const fn new(stamp: Stamp) -> Self {
    Self { position: None, stamp, state: CursorState::Created }
  }

  /// Element under the cursor.
  #[inline]
  pub fn current<'seq, S>(&self, seq: &'seq S) -> crate::Result<&'seq S::Item>
  where
    S: Sequence + ?Sized,
  {
    self.check(seq.stamp())?;
    match self.position {
      Some(idx) if idx < seq.len() => seq.get(idx),
      _ => Err(CursorError::NotPositioned.into()),
    }
  }

  /// Transitions to [`CursorState::Disposed`].
  #[inline]
  pub fn dispose<S>(&mut self, seq: &S) -> crate::Result<()>
  where
    S: Sequence + ?Sized,
  {
    self.validate(seq.stamp())?;
    self.position = None;
    self.state = CursorState::Disposed;
    Ok(())
  }

  /// Advances to the next element. Returns `false` when there are no more elements.
  #[inline]
  pub fn move_next<S>(&mut self, seq: &S) -> crate::Result<bool>
  where
    S: Sequence + ?Sized,
  {
    self.validate(seq.stamp())?;
    let len = seq.len();
    let idx = self.position.map_or(0, |elem| elem.wrapping_add(1)).min(len);
    self.position = Some(idx);
    self.state = CursorState::Advancing;
    Ok(idx < len)
  }

  /// Goes back to the location before the first element.
  #[inline]
  pub fn reset<S>(&mut self, seq: &S) -> crate::Result<()>
  where
    S: Sequence + ?Sized,
  {
    self.validate(seq.stamp())?;
    self.position = None;
    self.state = CursorState::Created;
    Ok(())
  }

  /// Current state.
  ///
  /// A cursor is only marked as [`CursorState::Invalidated`] after being used with a modified
  /// sequence.
  #[inline]
  pub const fn state(&self) -> CursorState {
    self.state
  }

  fn check(&self, stamp: Stamp) -> Result<(), CursorError> {
    match self.state {
      CursorState::Disposed => Err(CursorError::IteratorDisposed),
      CursorState::Invalidated => Err(CursorError::IterationInvalidated),
      CursorState::Advancing | CursorState::Created => {
        if self.stamp.deque_id != stamp.deque_id || self.stamp.reversed != stamp.reversed {
          return Err(CursorError::ForeignSequence);
        }
        if self.stamp.generation != stamp.generation {
          return Err(CursorError::IterationInvalidated);
        }
        Ok(())
      }
    }
  }

  fn validate(&mut self, stamp: Stamp) -> Result<(), CursorError> {
    let rslt = self.check(stamp);
    if rslt == Err(CursorError::IterationInvalidated) && self.state != CursorState::Invalidated {
      _trace!(
        expected = self.stamp.generation,
        received = stamp.generation,
        "Cursor invalidated"
      );
      self.state = CursorState::Invalidated;
    }
    rslt
  }
}

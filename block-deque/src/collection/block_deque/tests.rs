use crate::collection::{BlockDeque, BlockDequeError, DequeParams, ResizePolicy};
use alloc::{format, vec::Vec};

fn elements<T>(deque: &BlockDeque<T>) -> Vec<T>
where
  T: Copy,
{
  deque.iter().copied().collect()
}

fn is_err(rslt: crate::Result<impl core::fmt::Debug>, expected: BlockDequeError) -> bool {
  matches!(rslt, Err(crate::Error::BlockDequeError(err)) if err == expected)
}

// Add 1, 2, 3 then remove at 1
#[test]
fn add_then_remove_at_middle() {
  let mut deque = BlockDeque::new();
  deque.add(1).unwrap();
  deque.add(2).unwrap();
  deque.add(3).unwrap();
  assert_eq!(deque.remove_at(1).unwrap(), 2);
  assert_eq!(elements(&deque), [1, 3]);
  assert_eq!((deque[0], deque[1]), (1, 3));
}

#[test]
fn allocated_blocks_follow_cursors() {
  let mut deque = BlockDeque::with_block_size(2).unwrap();
  assert_eq!(deque.allocated_blocks(), 0);
  deque.push_right(1).unwrap();
  assert_eq!(deque.allocated_blocks(), 1);
  deque.extend_right_from_iter([2, 3, 4]).unwrap();
  assert_eq!(deque.allocated_blocks(), 3);
}

#[test]
fn clear() {
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter(0..40).unwrap();
  let blocks_len = deque.blocks_len();
  deque.clear();
  assert_eq!(deque.len(), 0);
  assert_eq!(deque.blocks_len(), blocks_len);
  assert!(is_err(deque.peek_left(), BlockDequeError::EmptyContainer));
  deque.push_left(1).unwrap();
  deque.push_right(2).unwrap();
  assert_eq!(elements(&deque), [1, 2]);
}

#[test]
fn clone_debug_and_eq() {
  let mut deque = BlockDeque::with_block_size(3).unwrap();
  deque.extend_right_from_iter([1, 2, 3, 4]).unwrap();
  let cloned = deque.clone();
  assert_eq!(cloned, deque);
  assert_eq!(cloned.params(), deque.params());
  assert_eq!(format!("{deque:?}"), "[1, 2, 3, 4]");
  let _ = deque.pop_left().unwrap();
  assert_ne!(cloned, deque);
  deque.push_left(1).unwrap();
  assert_eq!(cloned, deque);
}

#[test]
fn contains() {
  let mut deque = BlockDeque::new();
  assert!(!deque.contains(&7));
  deque.add(6).unwrap();
  deque.add(7).unwrap();
  assert!(deque.contains(&7));
  assert!(!deque.contains(&8));
}

#[test]
fn copy_to() {
  let mut deque = BlockDeque::new();
  let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
  deque.extend_right_from_iter(source).unwrap();
  let mut target = [0; 10];
  deque.copy_to(Some(&mut target[..]), 0).unwrap();
  assert_eq!(target, source);
}

#[test]
fn copy_to_invalid_arguments() {
  let mut deque = BlockDeque::new();
  assert!(is_err(deque.copy_to(None, 0), BlockDequeError::MissingDestination));
  deque.extend_right_from_iter([1, 2, 3]).unwrap();
  let mut target = [0; 4];
  assert!(is_err(
    deque.copy_to(Some(&mut target[..]), 2),
    BlockDequeError::InvalidCopyRange { destination_len: 4, offset: 2, len: 3 }
  ));
  assert!(is_err(
    deque.copy_to(Some(&mut target[..]), 5),
    BlockDequeError::InvalidCopyRange { destination_len: 4, offset: 5, len: 3 }
  ));
  assert_eq!(target, [0; 4]);
  deque.copy_to(Some(&mut target[..]), 1).unwrap();
  assert_eq!(target, [0, 1, 2, 3]);
}

#[test]
fn count() {
  let mut deque = BlockDeque::new();
  assert_eq!(deque.len(), 0);
  assert!(deque.is_empty());
  deque.add(5).unwrap();
  deque.add(5).unwrap();
  deque.add(5).unwrap();
  assert_eq!(deque.len(), 3);
  assert!(!deque.is_empty());
}

#[test]
fn creation() {
  let deque = BlockDeque::<i32>::new();
  assert_eq!(deque.block_size(), 5);
  assert_eq!(deque.blocks_len(), 5);
  assert_eq!(deque.params(), DequeParams::DEFAULT);
  assert_eq!(BlockDeque::<i32>::default().params(), DequeParams::default());
  let deque = BlockDeque::<i32>::with_block_size(9).unwrap();
  assert_eq!(deque.block_size(), 9);
  assert_eq!(deque.blocks_len(), 9);
}

#[test]
fn custom_policy_is_transparent() {
  let policy = ResizePolicy::new(5, 25).unwrap();
  let mut deque = BlockDeque::with_params(DequeParams::new(2).with_policy(policy)).unwrap();
  for idx in 0..200 {
    deque.push_right(idx).unwrap();
    deque.push_left(-idx - 1).unwrap();
  }
  assert_eq!(deque.params().policy, policy);
  assert_eq!(elements(&deque), (-200..200).collect::<Vec<_>>());
  let grown = deque.blocks_len();
  for idx in 0..199 {
    assert_eq!(deque.pop_left().unwrap(), -200 + idx);
    assert_eq!(deque.pop_right().unwrap(), 199 - idx);
  }
  assert_eq!(elements(&deque), [-1, 0]);
  assert!(deque.blocks_len() < grown);
}

#[test]
fn empty_pops() {
  let mut deque = BlockDeque::<i32>::new();
  assert!(is_err(deque.pop_left(), BlockDequeError::EmptyContainer));
  assert!(is_err(deque.pop_right(), BlockDequeError::EmptyContainer));
  assert!(is_err(deque.peek_left(), BlockDequeError::EmptyContainer));
  assert!(is_err(deque.peek_right(), BlockDequeError::EmptyContainer));
}

#[test]
fn extend_from_both_ends() {
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter([3, 4]).unwrap();
  deque.extend_left_from_iter([2, 1]).unwrap();
  assert_eq!(elements(&deque), [1, 2, 3, 4]);
}

#[test]
fn index_of() {
  let mut deque = BlockDeque::new();
  deque.add(5).unwrap();
  for _ in 0..125 {
    deque.push_left(6).unwrap();
    deque.add(6).unwrap();
  }
  assert_eq!(deque.index_of(&5), Some(125));
  assert_eq!(deque.index_of_by_cmp(&5, Ord::cmp), Some(125));
  assert_eq!(deque.index_of_by(&5, |a, b| a == b), Some(125));
  assert_eq!(deque.index_of(&55), None);
  assert_eq!(deque.index_of_by_cmp(&7, |a, b| (a % 2).cmp(&(b % 2))), Some(125));
}

#[test]
fn insert() {
  let mut deque = BlockDeque::new();
  for _ in 0..124 {
    deque.add(2).unwrap();
  }
  deque.insert(124 / 2, 5).unwrap();
  assert_eq!(deque[124 / 2], 5);
  deque.insert(0, 5).unwrap();
  assert_eq!(deque[0], 5);
  deque.insert(deque.len(), 7).unwrap();
  assert_eq!(deque.peek_right().unwrap(), &7);
  assert_eq!(deque.len(), 127);
  assert!(is_err(deque.insert(128, 0), BlockDequeError::OutOfBoundsIndex { idx: 128, len: 127 }));
}

#[test]
fn insert_and_remove_at_preserve_order() {
  let mut deque = BlockDeque::with_block_size(3).unwrap();
  deque.extend_right_from_iter(0..10).unwrap();
  deque.insert(4, 40).unwrap();
  deque.insert(8, 80).unwrap();
  assert_eq!(elements(&deque), [0, 1, 2, 3, 40, 4, 5, 6, 80, 7, 8, 9]);
  assert_eq!(deque.remove_at(4).unwrap(), 40);
  assert_eq!(deque.remove_at(7).unwrap(), 80);
  assert_eq!(elements(&deque), (0..10).collect::<Vec<_>>());
}

#[test]
fn into_iter() {
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter(0..12).unwrap();
  let mut iter = deque.iter();
  assert_eq!(iter.len(), 12);
  assert_eq!(iter.next_back(), Some(&11));
  assert_eq!(iter.next(), Some(&0));
  assert_eq!(iter.len(), 10);
  assert_eq!((&deque).into_iter().count(), 12);
  let mut owned = deque.into_iter();
  assert_eq!(owned.next_back(), Some(11));
  assert_eq!(owned.collect::<Vec<_>>(), (0..11).collect::<Vec<_>>());
}

#[test]
fn invalid_creation() {
  assert!(is_err(BlockDeque::<i32>::with_block_size(0), BlockDequeError::InvalidBlockSize));
  assert!(is_err(ResizePolicy::new(2, 9), BlockDequeError::InvalidResizePolicy));
  assert!(is_err(ResizePolicy::new(3, 8), BlockDequeError::InvalidResizePolicy));
}

#[test]
fn invalid_index() {
  let mut deque = BlockDeque::<i32>::new();
  assert!(is_err(deque.get(1), BlockDequeError::OutOfBoundsIndex { idx: 1, len: 0 }));
  assert!(is_err(deque.get_mut(0), BlockDequeError::OutOfBoundsIndex { idx: 0, len: 0 }));
  assert!(is_err(deque.remove_at(0), BlockDequeError::OutOfBoundsIndex { idx: 0, len: 0 }));
  assert!(is_err(
    deque.set(usize::MAX, 1),
    BlockDequeError::OutOfBoundsIndex { idx: usize::MAX, len: 0 }
  ));
}

#[test]
#[should_panic]
fn invalid_index_operator() {
  let deque = BlockDeque::<i32>::new();
  let _elem = deque[1];
}

#[test]
fn long_add() {
  let mut deque = BlockDeque::new();
  for _ in 0..125 {
    deque.add(5).unwrap();
  }
  deque.add(7).unwrap();
  assert_eq!(deque.peek_right().unwrap(), &7);
  assert_eq!(deque.len(), 126);
}

#[test]
fn long_pop_right() {
  let mut deque = BlockDeque::new();
  deque.add(1).unwrap();
  for _ in 0..125 {
    deque.add(5).unwrap();
  }
  for _ in 0..125 {
    assert_eq!(deque.pop_right().unwrap(), 5);
  }
  assert_eq!(deque.pop_right().unwrap(), 1);
  assert_eq!(deque.len(), 0);
}

#[test]
fn long_remove() {
  let mut deque = BlockDeque::new();
  for _ in 0..125 {
    deque.add(5).unwrap();
  }
  deque.add(7).unwrap();
  for _ in 0..125 {
    assert_eq!(deque.remove(&5).unwrap(), Some(5));
  }
  assert_eq!(deque.len(), 1);
  assert_eq!(deque.peek_left().unwrap(), &7);
}

#[test]
fn long_remove_at_middle() {
  let mut deque = BlockDeque::new();
  deque.add(1).unwrap();
  for _ in 0..125 {
    deque.add(2).unwrap();
  }
  deque.add(3).unwrap();
  for _ in 0..125 {
    assert_eq!(deque.remove_at(1).unwrap(), 2);
  }
  assert_eq!(elements(&deque), [1, 3]);
}

#[test]
fn map_grows_and_shrinks() {
  #[cfg(feature = "_tracing-tree")]
  let _rslt = crate::misc::tracing_tree_init(None);
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter(0..125).unwrap();
  let grown = deque.blocks_len();
  assert!(grown > 5);
  for (idx, elem) in (0..125).zip(deque.iter()) {
    assert_eq!(&idx, elem);
  }
  for idx in 0..124 {
    assert_eq!(deque.pop_left().unwrap(), idx);
  }
  assert_eq!(deque.blocks_len(), 5);
  assert_eq!(deque.peek_left().unwrap(), &124);
  assert_eq!(deque.pop_right().unwrap(), 124);
  deque.extend_left_from_iter(0..125).unwrap();
  assert_eq!(deque.peek_left().unwrap(), &124);
  assert_eq!(deque.peek_right().unwrap(), &0);
}

#[test]
fn pop_right() {
  let mut deque = BlockDeque::new();
  deque.add(5).unwrap();
  assert_eq!(deque.pop_right().unwrap(), 5);
  assert_eq!(deque.len(), 0);
}

#[test]
fn push_and_pop_from_both_ends() {
  let mut deque = BlockDeque::new();
  for idx in 0..130 {
    deque.push_right(idx).unwrap();
  }
  for idx in (0..130).rev() {
    assert_eq!(deque.pop_right().unwrap(), idx);
  }
  for idx in 0..130 {
    deque.push_left(idx).unwrap();
  }
  for idx in (0..130).rev() {
    assert_eq!(deque.pop_left().unwrap(), idx);
  }
  assert!(deque.is_empty());
}

#[test]
fn push_left() {
  let mut deque = BlockDeque::new();
  for _ in 0..125 {
    deque.push_left(5).unwrap();
  }
  assert_eq!(deque.len(), 125);
  assert_eq!(deque.peek_left().unwrap(), &5);
  assert_eq!(deque.peek_right().unwrap(), &5);
}

#[test]
fn remove() {
  let mut deque = BlockDeque::new();
  assert_eq!(deque.remove(&5).unwrap(), None);
  deque.add(7).unwrap();
  assert_eq!(deque.remove(&7).unwrap(), Some(7));
  assert_eq!(deque.len(), 0);
}

#[test]
fn remove_at_edges() {
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter([1, 2, 3]).unwrap();
  assert_eq!(deque.remove_at(0).unwrap(), 1);
  assert_eq!(elements(&deque), [2, 3]);
  deque.push_left(1).unwrap();
  assert_eq!(deque.remove_at(2).unwrap(), 3);
  assert_eq!(elements(&deque), [1, 2]);
}

#[test]
fn set() {
  let mut deque = BlockDeque::new();
  deque.add(5).unwrap();
  deque[0] = 10;
  assert_eq!(deque[0], 10);
  assert_eq!(deque.set(0, 11).unwrap(), 10);
  *deque.get_mut(0).unwrap() = 12;
  assert_eq!(deque.get(0).unwrap(), &12);
}

#[test]
fn unit_blocks() {
  let mut deque = BlockDeque::with_block_size(1).unwrap();
  for idx in 0..50 {
    deque.push_right(idx).unwrap();
    deque.push_left(-idx - 1).unwrap();
  }
  assert_eq!(elements(&deque), (-50..50).collect::<Vec<_>>());
  while deque.len() > 1 {
    let _ = deque.pop_right().unwrap();
  }
  assert_eq!(deque.blocks_len(), 1);
  assert_eq!(deque.pop_left().unwrap(), -50);
}

#[test]
fn clone_keeps_every_element_and_layout() {
  let mut deque = BlockDeque::new();
  deque.extend_right_from_iter(0..300).unwrap();
  deque.extend_left_from_iter(300..400).unwrap();
  for _ in 0..150 {
    let _ = deque.pop_right().unwrap();
  }
  let mut cloned = deque.clone();
  assert_eq!(cloned.len(), 250);
  assert_eq!(cloned, deque);
  assert_eq!(cloned.blocks_len(), deque.blocks_len());
  assert_eq!(cloned.allocated_blocks(), deque.allocated_blocks());
  cloned.push_right(-1).unwrap();
  let _ = cloned.pop_left().unwrap();
  assert_eq!(deque.len(), 250);
  assert_eq!(deque.peek_left().unwrap(), &399);
  assert_eq!(cloned.peek_left().unwrap(), &398);
  assert_eq!(cloned.peek_right().unwrap(), &-1);
}

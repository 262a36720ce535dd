//! Block deque

#![no_main]

use block_deque::collection::{BlockDeque, SequenceMut};
use std::collections::VecDeque;

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
  Clear,
  Insert(u8, u8),
  PopLeft,
  PopRight,
  PushLeft(u8),
  PushRight(u8),
  RemoveAt(u8),
  ReversedInsert(u8, u8),
  ReversedPushLeft(u8),
  Set(u8, u8),
}

libfuzzer_sys::fuzz_target!(|data: (BlockDeque<u8>, Vec<Op>)| {
  let (mut deque, ops) = data;
  let mut vec_deque: VecDeque<u8> = deque.iter().copied().collect();
  for op in ops {
    match op {
      Op::Clear => {
        deque.clear();
        vec_deque.clear();
      }
      Op::Insert(idx, value) => {
        let idx = usize::from(idx);
        let rslt = deque.insert(idx, value);
        if idx <= vec_deque.len() {
          assert!(rslt.is_ok());
          vec_deque.insert(idx, value);
        } else {
          assert!(rslt.is_err());
        }
      }
      Op::PopLeft => assert_eq!(deque.pop_left().ok(), vec_deque.pop_front()),
      Op::PopRight => assert_eq!(deque.pop_right().ok(), vec_deque.pop_back()),
      Op::PushLeft(value) => {
        deque.push_left(value).unwrap();
        vec_deque.push_front(value);
      }
      Op::PushRight(value) => {
        deque.push_right(value).unwrap();
        vec_deque.push_back(value);
      }
      Op::RemoveAt(idx) => {
        assert_eq!(deque.remove_at(usize::from(idx)).ok(), vec_deque.remove(usize::from(idx)));
      }
      Op::ReversedInsert(idx, value) => {
        let idx = usize::from(idx);
        let len = vec_deque.len();
        let rslt = deque.reverse().insert(idx, value);
        if let Some(local_idx) = len.checked_sub(idx) {
          assert!(rslt.is_ok());
          vec_deque.insert(local_idx, value);
        } else {
          assert!(rslt.is_err());
        }
      }
      Op::ReversedPushLeft(value) => {
        deque.reverse().push_left(value).unwrap();
        vec_deque.push_back(value);
      }
      Op::Set(idx, value) => {
        let idx = usize::from(idx);
        let expected = vec_deque.get_mut(idx).map(|elem| core::mem::replace(elem, value));
        assert_eq!(deque.set(idx, value).ok(), expected);
      }
    }
    assert_eq!(deque.len(), vec_deque.len());
    assert_eq!(deque.peek_left().ok(), vec_deque.front());
    assert_eq!(deque.peek_right().ok(), vec_deque.back());
  }
  assert!(deque.iter().eq(vec_deque.iter()));
  assert!(deque.reversed().iter().eq(vec_deque.iter().rev()));
});

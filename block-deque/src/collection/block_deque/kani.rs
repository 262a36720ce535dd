use crate::collection::BlockDeque;
use alloc::collections::VecDeque;

#[kani::proof]
fn deque() {
  let bytes = kani::vec::any_vec::<u8, 16>();
  let mut deque = BlockDeque::with_block_size(2).unwrap();
  let mut vec_deque = VecDeque::with_capacity(bytes.len());

  for byte in bytes.iter().copied() {
    deque.push_left(byte).unwrap();
    vec_deque.push_front(byte);
  }
  assert_eq!(deque.len(), vec_deque.len());
  for _ in 0..(bytes.len() / 2) {
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.get_mut(0).ok(), vec_deque.get_mut(0));
    assert_eq!(deque.pop_right().ok(), vec_deque.pop_back());
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.pop_left().ok(), vec_deque.pop_front());
  }
  loop {
    if deque.is_empty() {
      break;
    }
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.pop_right().ok(), vec_deque.pop_back());
    if deque.is_empty() {
      break;
    }
    assert_eq!(deque.get_mut(0).ok(), vec_deque.get_mut(0));
    assert_eq!(deque.pop_left().ok(), vec_deque.pop_front());
  }
  assert_eq!((deque.len(), vec_deque.len()), (0, 0));
}

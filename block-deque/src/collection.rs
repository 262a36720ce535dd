//! Collection types

mod block_deque;
mod cursor;
mod deque_params;
mod reversed;
mod sequence;

pub use block_deque::{BlockDeque, BlockDequeError, IntoIter, Iter};
pub use cursor::{Cursor, CursorError, CursorState, Stamp};
pub use deque_params::{DequeParams, ResizePolicy};
pub use reversed::Reversed;
pub use sequence::{Reverse, Sequence, SequenceMut};

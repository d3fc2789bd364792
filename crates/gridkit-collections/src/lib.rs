//! **gridkit-collections** — heap, queue and sliding-window building blocks.
//!
//! These are the traversal workhorses used by the rest of the *gridkit*
//! ecosystem:
//!
//! - [`MinHeap`] — array-backed binary min-heap with a pluggable score
//! - [`PriorityQueue`] — `{value, priority}` interface over [`MinHeap`]
//! - [`Queue`] — FIFO with visitation memory for flood fills
//! - [`Stack`] — LIFO with bulk push/pop
//! - [`Windows`] — fixed-size sliding windows over a slice

pub mod heap;
pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod windows;

pub use heap::MinHeap;
pub use priority_queue::{PriorityQueue, PriorityQueueItem};
pub use queue::{Keyed, Queue};
pub use stack::Stack;
pub use windows::Windows;

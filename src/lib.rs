//! Mergeable Post Priority Queue
//!
//! This crate provides [`SQueue`], a priority queue of social feed posts built on
//! a mergeable heap whose shape can be switched at runtime between two structures:
//!
//! - **Skew Heap**: children swapped after every merge step; O(log n) amortized insert,
//!   delete and merge, no balance bookkeeping
//! - **Leftist Heap**: null path lengths kept so that `npl(left) >= npl(right)`;
//!   O(log n) worst-case insert, delete and merge
//!
//! Posts are ranked by a priority function (`fn(&Post) -> i32`, where 0 rejects
//! the post) in either minimum-first or maximum-first order. Replacing the
//! function, the order or the structure rebuilds the tree without copying posts.
//!
//! # Example
//!
//! ```rust
//! use rust_post_queue::{priority_fn1, priority_fn2, HeapType, PostGenerator, SQueue, Structure};
//!
//! let mut generator = PostGenerator::new();
//! let mut queue = SQueue::new(priority_fn2, HeapType::MinHeap, Structure::Leftist);
//! for post in generator.random_posts(10) {
//!     assert!(queue.insert_post(&post));
//! }
//!
//! queue.set_priority_fn(priority_fn1, HeapType::MaxHeap);
//! let first = queue.get_next_post().unwrap();
//! let second = queue.get_next_post().unwrap();
//! assert!(priority_fn1(&first) >= priority_fn1(&second));
//! ```

pub mod config;
pub mod error;
pub mod generator;
mod node;
pub mod post;
pub mod priority;
pub mod squeue;

pub use config::{HeapType, QueueConfig, Structure};
pub use error::{ParseConfigError, QueueError};
pub use generator::PostGenerator;
pub use post::Post;
pub use priority::{priority_fn1, priority_fn2, same_priority_fn, PriorityFn};
pub use squeue::{merge_shared, SQueue, SharedQueue};

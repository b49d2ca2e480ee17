//! Post queue over a skew or leftist heap
//!
//! [`SQueue`] owns a tree of posts ordered by a priority function and an
//! ordering direction. The function, the direction and the tree structure can
//! all be changed at runtime; doing so rebuilds the tree in place.
//!
//! # Time Complexity
//!
//! | Operation          | Skew (amortized) | Leftist (worst case) |
//! |--------------------|------------------|----------------------|
//! | `insert_post`      | O(log n)         | O(log n)             |
//! | `get_next_post`    | O(log n)         | O(log n)             |
//! | `merge_with_queue` | O(log n)         | O(log n)             |
//! | `set_priority_fn`  | O(n log n)       | O(n log n)           |
//! | `clone`            | O(n)             | O(n)                 |
//!
//! # Recursion depth
//!
//! A skew heap has no height bound, so no operation recurses per tree level.
//! Merging, rebuilding, cloning, dropping and both renderings walk the tree
//! with explicit stacks.
//!
//! # Example
//!
//! ```rust
//! use rust_post_queue::{priority_fn1, HeapType, Post, SQueue, Structure};
//!
//! let mut queue = SQueue::new(priority_fn1, HeapType::MaxHeap, Structure::Leftist);
//! assert!(queue.insert_post(&Post::new(100_001, 40, 2, 10, 5)));
//! assert!(queue.insert_post(&Post::new(100_002, 90, 1, 20, 3)));
//! assert!(!queue.insert_post(&Post::new(100_003, 0, 1, 20, 0)));
//!
//! assert_eq!(queue.num_posts(), 2);
//! assert_eq!(queue.get_next_post().unwrap().post_id(), 100_002);
//! ```

use crate::config::{HeapType, QueueConfig, Structure};
use crate::error::QueueError;
use crate::node::{self, Comparator, Link, Node};
use crate::post::Post;
use crate::priority::{same_priority_fn, PriorityFn};
use log::{debug, trace, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Queue handle that can be shared, and therefore aliased
pub type SharedQueue = Rc<RefCell<SQueue>>;

/// Priority queue of posts
///
/// `Clone` produces a deep copy: the two queues share no nodes, and changes
/// to one are never visible through the other.
#[derive(Clone)]
pub struct SQueue {
    heap: Link,
    size: usize,
    priority_fn: PriorityFn,
    heap_type: HeapType,
    structure: Structure,
}

impl SQueue {
    /// Creates an empty queue
    pub fn new(priority_fn: PriorityFn, heap_type: HeapType, structure: Structure) -> Self {
        Self {
            heap: None,
            size: 0,
            priority_fn,
            heap_type,
            structure,
        }
    }

    /// Creates an empty queue from a [`QueueConfig`]
    pub fn with_config(priority_fn: PriorityFn, config: QueueConfig) -> Self {
        Self::new(priority_fn, config.heap_type, config.structure)
    }

    fn comparator(&self) -> Comparator {
        Comparator {
            priority_fn: self.priority_fn,
            heap_type: self.heap_type,
        }
    }

    /// Inserts a copy of `post`
    ///
    /// Returns `false` and leaves the queue untouched when the priority
    /// function scores the post 0.
    pub fn insert_post(&mut self, post: &Post) -> bool {
        let score = (self.priority_fn)(post);
        if score == 0 {
            trace!("rejected post {} (score 0)", post.post_id());
            return false;
        }

        let cmp = self.comparator();
        self.heap = node::merge_nodes(
            self.heap.take(),
            Some(Node::singleton(*post)),
            &cmp,
            self.structure,
        );
        self.size += 1;
        trace!("inserted post {} with score {}", post.post_id(), score);
        true
    }

    /// Removes and returns the highest priority post
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no posts.
    pub fn get_next_post(&mut self) -> Result<Post, QueueError> {
        let mut root = self.heap.take().ok_or(QueueError::Empty)?;
        let post = root.post;

        let cmp = self.comparator();
        self.heap = node::merge_nodes(root.left.take(), root.right.take(), &cmp, self.structure);
        self.size -= 1;
        trace!("removed post {}", post.post_id());
        Ok(post)
    }

    /// Moves every post of `other` into this queue, leaving `other` empty
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Incompatible`] if the queues differ in priority
    /// function, heap type or structure. Neither queue is modified then.
    pub fn merge_with_queue(&mut self, other: &mut SQueue) -> Result<(), QueueError> {
        if !self.is_compatible(other) {
            warn!(
                "refusing to merge {}/{} queue into {}/{} queue",
                other.heap_type, other.structure, self.heap_type, self.structure
            );
            return Err(QueueError::Incompatible);
        }

        let moved = std::mem::take(&mut other.size);
        let cmp = self.comparator();
        self.heap = node::merge_nodes(self.heap.take(), other.heap.take(), &cmp, self.structure);
        self.size += moved;
        debug!("merged {} posts, queue now holds {}", moved, self.size);
        Ok(())
    }

    /// Returns true if `other` ranks posts exactly the way this queue does
    pub fn is_compatible(&self, other: &SQueue) -> bool {
        same_priority_fn(self.priority_fn, other.priority_fn)
            && self.heap_type == other.heap_type
            && self.structure == other.structure
    }

    /// Number of posts in the queue
    pub fn num_posts(&self) -> usize {
        self.size
    }

    /// Returns true if the queue holds no posts
    pub fn is_empty(&self) -> bool {
        self.heap.is_none()
    }

    /// Function currently used to score posts
    pub fn get_priority_fn(&self) -> PriorityFn {
        self.priority_fn
    }

    /// Whether the lowest or the highest score is served first
    pub fn get_heap_type(&self) -> HeapType {
        self.heap_type
    }

    /// Tree structure the queue is currently built as
    pub fn get_structure(&self) -> Structure {
        self.structure
    }

    /// Ordering direction and structure as one value
    ///
    /// Passing it to [`SQueue::with_config`] with the same priority function
    /// yields an empty queue compatible with this one.
    pub fn config(&self) -> QueueConfig {
        QueueConfig {
            heap_type: self.heap_type,
            structure: self.structure,
        }
    }

    /// Replaces the priority function and ordering direction, then rebuilds
    pub fn set_priority_fn(&mut self, priority_fn: PriorityFn, heap_type: HeapType) {
        self.priority_fn = priority_fn;
        self.heap_type = heap_type;
        self.rebuild_heap();
    }

    /// Switches between skew and leftist structure, then rebuilds
    pub fn set_structure(&mut self, structure: Structure) {
        self.structure = structure;
        self.rebuild_heap();
    }

    fn rebuild_heap(&mut self) {
        let cmp = self.comparator();
        self.heap = node::rebuild(self.heap.take(), &cmp, self.structure);
        debug!(
            "rebuilt {} posts as {} {} heap",
            self.size, self.heap_type, self.structure
        );
    }

    /// Removes every post
    pub fn clear(&mut self) {
        if self.size > 0 {
            debug!("clearing {} posts", self.size);
        }
        self.heap = None;
        self.size = 0;
    }

    /// Parenthesized in-order dump of the tree, for debugging
    ///
    /// Each node prints as `score:id` in skew mode and `score:id:npl` in
    /// leftist mode.
    pub fn dump(&self) -> String {
        if self.heap.is_none() {
            return "Empty heap.".to_owned();
        }
        TreeDump(self).to_string()
    }

    /// Posts in pre-order, each paired with its current score
    pub fn scored_posts(&self) -> Vec<(i32, Post)> {
        node::preorder(&self.heap)
            .into_iter()
            .map(|n| ((self.priority_fn)(&n.post), n.post))
            .collect()
    }

    /// Checks that no post outranks its parent
    pub fn verify_heap_order(&self) -> bool {
        node::verify_heap_order(&self.heap, &self.comparator())
    }

    /// Checks the leftist property on every node
    ///
    /// Always true for an empty queue; meaningless in skew mode.
    pub fn verify_leftist_property(&self) -> bool {
        node::verify_leftist(&self.heap)
    }

    /// Checks that the tree holds exactly [`num_posts`](Self::num_posts) nodes
    pub fn verify_size(&self) -> bool {
        node::count(&self.heap) == self.size
    }
}

/// Merges `source` into `target` through shared handles
///
/// # Errors
///
/// Returns [`QueueError::SelfMerge`] if both handles refer to the same
/// queue, and [`QueueError::Incompatible`] as for
/// [`SQueue::merge_with_queue`].
///
/// # Panics
///
/// Panics if either queue is already borrowed, as `RefCell::borrow_mut`
/// does. Both handles are borrowed mutably for the duration of the call.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rust_post_queue::{merge_shared, priority_fn2, HeapType, QueueError, SQueue, Structure};
///
/// let queue = Rc::new(RefCell::new(SQueue::new(priority_fn2, HeapType::MinHeap, Structure::Skew)));
/// let alias = Rc::clone(&queue);
/// assert_eq!(merge_shared(&queue, &alias), Err(QueueError::SelfMerge));
/// ```
pub fn merge_shared(target: &SharedQueue, source: &SharedQueue) -> Result<(), QueueError> {
    if Rc::ptr_eq(target, source) {
        warn!("refusing to merge a queue with itself");
        return Err(QueueError::SelfMerge);
    }
    target
        .borrow_mut()
        .merge_with_queue(&mut source.borrow_mut())
}

/// In-order rendering behind [`SQueue::dump`]
struct TreeDump<'a>(&'a SQueue);

enum DumpStep<'a> {
    Open(&'a Node),
    Label(&'a Node),
    Close,
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.0;
        let mut steps: Vec<DumpStep<'_>> = Vec::new();
        if let Some(root) = queue.heap.as_deref() {
            steps.push(DumpStep::Open(root));
        }

        while let Some(step) = steps.pop() {
            match step {
                DumpStep::Open(node) => {
                    f.write_str("(")?;
                    // Pushed in reverse: left subtree, label, right subtree, close.
                    steps.push(DumpStep::Close);
                    if let Some(right) = node.right.as_deref() {
                        steps.push(DumpStep::Open(right));
                    }
                    steps.push(DumpStep::Label(node));
                    if let Some(left) = node.left.as_deref() {
                        steps.push(DumpStep::Open(left));
                    }
                }
                DumpStep::Label(node) => {
                    let score = (queue.priority_fn)(&node.post);
                    match queue.structure {
                        Structure::Skew => write!(f, "{}:{}", score, node.post.post_id())?,
                        Structure::Leftist => {
                            write!(f, "{}:{}:{}", score, node.post.post_id(), node.npl)?
                        }
                    }
                }
                DumpStep::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for SQueue {
    /// Pre-order listing with the score of every post
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contents of the queue:")?;
        for (score, post) in self.scored_posts() {
            writeln!(f, "[{}] {}", score, post)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SQueue")
            .field("size", &self.size)
            .field("heap_type", &self.heap_type)
            .field("structure", &self.structure)
            .finish_non_exhaustive()
    }
}

//! Priority functions
//!
//! A priority function maps a [`Post`] to an integer score. A score of 0
//! means the post is not acceptable and must not be queued; any other value
//! is the post's rank. Range checks belong to the function, not the queue.

use crate::post::Post;

/// Scoring function used to rank posts; 0 rejects the post
pub type PriorityFn = fn(&Post) -> i32;

/// Returns true if both values refer to the same function
///
/// Queues are only compatible when they share the very same function, so
/// two distinct functions with identical bodies are treated as different.
#[inline]
pub fn same_priority_fn(a: PriorityFn, b: PriorityFn) -> bool {
    a as usize == b as usize
}

/// Likes plus interest level, accepted in `1..=510`
///
/// A sum that overflows `i32` is out of range and scores 0.
pub fn priority_fn1(post: &Post) -> i32 {
    post.num_likes()
        .checked_add(post.interest_level())
        .filter(|priority| (1..=510).contains(priority))
        .unwrap_or(0)
}

/// Post time plus connection level, accepted in `2..=55`
///
/// A sum that overflows `i32` is out of range and scores 0.
pub fn priority_fn2(post: &Post) -> i32 {
    post.post_time()
        .checked_add(post.connect_level())
        .filter(|priority| (2..=55).contains(priority))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_fn1_range() {
        assert_eq!(priority_fn1(&Post::new(1, 100, 1, 1, 5)), 105);
        assert_eq!(priority_fn1(&Post::new(1, 0, 1, 1, 0)), 0);
        assert_eq!(priority_fn1(&Post::new(1, 500, 1, 1, 10)), 510);
        assert_eq!(priority_fn1(&Post::new(1, 501, 1, 1, 10)), 0);
    }

    #[test]
    fn test_priority_fn2_range() {
        assert_eq!(priority_fn2(&Post::new(1, 0, 3, 20, 1)), 23);
        assert_eq!(priority_fn2(&Post::new(1, 0, 1, 0, 1)), 0);
        assert_eq!(priority_fn2(&Post::new(1, 0, 5, 50, 1)), 55);
        assert_eq!(priority_fn2(&Post::new(1, 0, 6, 50, 1)), 0);
    }

    #[test]
    fn test_overflowing_sums_are_rejected() {
        assert_eq!(priority_fn1(&Post::new(1, i32::MAX, 1, 1, 1)), 0);
        assert_eq!(priority_fn1(&Post::new(1, 1, 1, 1, i32::MAX)), 0);
        assert_eq!(priority_fn1(&Post::new(1, i32::MIN, 1, 1, -1)), 0);
        assert_eq!(priority_fn2(&Post::new(1, 0, i32::MAX, 1, 1)), 0);
        assert_eq!(priority_fn2(&Post::new(1, 0, 1, i32::MAX, 1)), 0);
    }

    #[test]
    fn test_insert_with_extreme_attributes_is_rejected() {
        use crate::{HeapType, SQueue, Structure};

        let mut queue = SQueue::new(priority_fn1, HeapType::MinHeap, Structure::Leftist);
        assert!(!queue.insert_post(&Post::new(1, i32::MAX, 1, 1, 1)));
        assert_eq!(queue.num_posts(), 0);

        let mut queue = SQueue::new(priority_fn2, HeapType::MaxHeap, Structure::Skew);
        assert!(!queue.insert_post(&Post::new(2, 0, i32::MAX, 1, 1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_function_identity() {
        assert!(same_priority_fn(priority_fn1, priority_fn1));
        assert!(!same_priority_fn(priority_fn1, priority_fn2));
    }
}

//! Mergeable heap core shared by the skew and leftist structures
//!
//! Every mutation of a queue reduces to [`merge_nodes`]: insertion merges a
//! singleton tree into the root, extraction merges the root's two children,
//! and queue merging joins two roots.
//!
//! The merge walks down the right spines of both trees, always continuing
//! with the right subtree of whichever root ranks higher, and then fixes up
//! the visited nodes bottom-up. The walk keeps the visited nodes on an
//! explicit stack instead of recursing, because a skew heap has no height
//! bound and an adversarial insertion order can make the right spine as long
//! as the heap itself.
//!
//! # Tie-breaking
//!
//! [`Comparator::keeps_first`] is non-strict, so on equal scores the operand
//! passed first to the merge stays on top.

use crate::config::{HeapType, Structure};
use crate::post::Post;
use crate::priority::PriorityFn;

/// Owned link to a subtree
pub(crate) type Link = Option<Box<Node>>;

/// A tree node owning one post and both of its subtrees
pub(crate) struct Node {
    pub(crate) post: Post,
    pub(crate) left: Link,
    pub(crate) right: Link,
    /// Null path length; only maintained in leftist mode
    pub(crate) npl: usize,
}

impl Node {
    pub(crate) fn singleton(post: Post) -> Box<Self> {
        Box::new(Self {
            post,
            left: None,
            right: None,
            npl: 0,
        })
    }

    /// Copy of this node's post and npl, with no children
    fn detached_copy(&self) -> Box<Self> {
        Box::new(Self {
            post: self.post,
            left: None,
            right: None,
            npl: self.npl,
        })
    }

    /// Fixes up `self` after `merged` has been produced from its old right
    /// subtree and the other operand
    fn attach(&mut self, merged: Link, structure: Structure) {
        match structure {
            Structure::Skew => {
                self.right = self.left.take();
                self.left = merged;
            }
            Structure::Leftist => {
                self.right = merged;
                if npl(&self.left) < npl(&self.right) {
                    std::mem::swap(&mut self.left, &mut self.right);
                }
                self.npl = self.right.as_ref().map_or(0, |right| right.npl + 1);
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            post: self.post,
            left: deep_copy(&self.left),
            right: deep_copy(&self.right),
            npl: self.npl,
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink the subtrees first so no drop recurses into a child.
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Copies every node reachable from `link`, mirroring its shape
///
/// Each pending entry pairs a source node with its already allocated copy,
/// whose child slots are filled when the entry is popped.
pub(crate) fn deep_copy(link: &Link) -> Link {
    let source = link.as_deref()?;
    let mut root = source.detached_copy();
    let mut pending: Vec<(&Node, &mut Node)> = vec![(source, &mut *root)];

    while let Some((from, to)) = pending.pop() {
        let Node { left, right, .. } = to;
        if let Some(child) = from.left.as_deref() {
            pending.push((child, &mut **left.insert(child.detached_copy())));
        }
        if let Some(child) = from.right.as_deref() {
            pending.push((child, &mut **right.insert(child.detached_copy())));
        }
    }
    Some(root)
}

/// Null path length of a link; an absent subtree counts as 0
#[inline]
pub(crate) fn npl(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.npl)
}

/// Priority function paired with an ordering direction
#[derive(Clone, Copy)]
pub(crate) struct Comparator {
    pub(crate) priority_fn: PriorityFn,
    pub(crate) heap_type: HeapType,
}

impl Comparator {
    #[inline]
    pub(crate) fn score(&self, post: &Post) -> i32 {
        (self.priority_fn)(post)
    }

    /// Returns true when `first` should remain the root of a merge with `second`
    #[inline]
    pub(crate) fn keeps_first(&self, first: &Post, second: &Post) -> bool {
        let p1 = self.score(first);
        let p2 = self.score(second);
        match self.heap_type {
            HeapType::MinHeap => p1 <= p2,
            HeapType::MaxHeap => p1 >= p2,
        }
    }
}

/// Merges two trees under the given comparator and structure
///
/// Either tree may be empty, in which case the other is returned unchanged.
pub(crate) fn merge_nodes(h1: Link, h2: Link, cmp: &Comparator, structure: Structure) -> Link {
    // Nodes whose right subtree is still being merged, topmost first
    let mut spine: Vec<Box<Node>> = Vec::new();
    let (mut a, mut b) = (h1, h2);

    let mut merged = loop {
        match (a, b) {
            (None, rest) | (rest, None) => break rest,
            (Some(x), Some(y)) => {
                let (mut top, other) = if cmp.keeps_first(&x.post, &y.post) {
                    (x, y)
                } else {
                    (y, x)
                };
                a = top.right.take();
                b = Some(other);
                spine.push(top);
            }
        }
    };

    while let Some(mut top) = spine.pop() {
        top.attach(merged, structure);
        merged = Some(top);
    }
    merged
}

/// Detaches every node of `root` and merges them again one by one
///
/// Nodes are visited in pre-order. Each node's children are taken before the
/// node is merged into the new tree, so a node that has already been
/// re-linked is never visited twice. No post is copied.
pub(crate) fn rebuild(root: Link, cmp: &Comparator, structure: Structure) -> Link {
    let mut rebuilt: Link = None;
    let mut pending: Vec<Box<Node>> = Vec::new();
    pending.extend(root);

    while let Some(mut node) = pending.pop() {
        let left = node.left.take();
        let right = node.right.take();
        node.npl = 0;
        rebuilt = merge_nodes(rebuilt, Some(node), cmp, structure);
        // Right is pushed first so the left subtree is visited first.
        pending.extend(right);
        pending.extend(left);
    }
    rebuilt
}

/// Number of nodes reachable from `link`
pub(crate) fn count(link: &Link) -> usize {
    let mut total = 0;
    let mut stack: Vec<&Node> = Vec::new();
    stack.extend(link.as_deref());
    while let Some(node) = stack.pop() {
        total += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    total
}

/// Pre-order traversal of all nodes reachable from `link`
pub(crate) fn preorder(link: &Link) -> Vec<&Node> {
    let mut order = Vec::new();
    let mut stack: Vec<&Node> = Vec::new();
    stack.extend(link.as_deref());
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    order
}

/// Checks that no child outranks its parent
pub(crate) fn verify_heap_order(link: &Link, cmp: &Comparator) -> bool {
    preorder(link).into_iter().all(|node| {
        [&node.left, &node.right]
            .into_iter()
            .flatten()
            .all(|child| cmp.keeps_first(&node.post, &child.post))
    })
}

/// Checks `npl(left) >= npl(right)` and the stored npl of every node
pub(crate) fn verify_leftist(link: &Link) -> bool {
    preorder(link).into_iter().all(|node| {
        let expected = node.right.as_ref().map_or(0, |right| right.npl + 1);
        npl(&node.left) >= npl(&node.right) && node.npl == expected
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::priority_fn1;

    fn by_likes(post: &Post) -> i32 {
        post.num_likes()
    }

    fn post(id: i32, likes: i32) -> Post {
        Post::new(id, likes, 1, 1, 1)
    }

    fn min_cmp() -> Comparator {
        Comparator {
            priority_fn: by_likes,
            heap_type: HeapType::MinHeap,
        }
    }

    fn build(likes: &[i32], cmp: &Comparator, structure: Structure) -> Link {
        likes.iter().enumerate().fold(None, |root, (i, &l)| {
            merge_nodes(root, Some(Node::singleton(post(i as i32, l))), cmp, structure)
        })
    }

    fn drain(mut root: Link, cmp: &Comparator, structure: Structure) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(mut node) = root {
            out.push(cmp.score(&node.post));
            root = merge_nodes(node.left.take(), node.right.take(), cmp, structure);
        }
        out
    }

    #[test]
    fn test_merge_with_empty() {
        let cmp = min_cmp();
        assert!(merge_nodes(None, None, &cmp, Structure::Skew).is_none());

        let single = Some(Node::singleton(post(1, 5)));
        let merged = merge_nodes(None, single, &cmp, Structure::Leftist).unwrap();
        assert_eq!(merged.post.post_id(), 1);

        let single = Some(Node::singleton(post(2, 5)));
        let merged = merge_nodes(single, None, &cmp, Structure::Leftist).unwrap();
        assert_eq!(merged.post.post_id(), 2);
    }

    #[test]
    fn test_keeps_first_on_tie() {
        let cmp = min_cmp();
        let a = post(1, 7);
        let b = post(2, 7);
        assert!(cmp.keeps_first(&a, &b));
        assert!(cmp.keeps_first(&b, &a));

        let merged = merge_nodes(
            Some(Node::singleton(a)),
            Some(Node::singleton(b)),
            &cmp,
            Structure::Skew,
        )
        .unwrap();
        assert_eq!(merged.post.post_id(), 1);
    }

    #[test]
    fn test_max_heap_comparator() {
        let cmp = Comparator {
            priority_fn: by_likes,
            heap_type: HeapType::MaxHeap,
        };
        assert!(cmp.keeps_first(&post(1, 9), &post(2, 3)));
        assert!(!cmp.keeps_first(&post(1, 3), &post(2, 9)));
    }

    #[test]
    fn test_skew_swaps_children() {
        let cmp = min_cmp();
        // 1 becomes root, 2 goes left after the swap
        let root = build(&[1, 2], &cmp, Structure::Skew).unwrap();
        assert_eq!(root.post.num_likes(), 1);
        assert_eq!(root.left.as_ref().map(|n| n.post.num_likes()), Some(2));
        assert!(root.right.is_none());

        // merging 3: right(None) + 3 -> left, old left (2) -> right
        let root = merge_nodes(Some(root), Some(Node::singleton(post(9, 3))), &cmp, Structure::Skew)
            .unwrap();
        assert_eq!(root.left.as_ref().map(|n| n.post.num_likes()), Some(3));
        assert_eq!(root.right.as_ref().map(|n| n.post.num_likes()), Some(2));
    }

    #[test]
    fn test_leftist_npl_of_absent_left_is_zero() {
        let cmp = min_cmp();
        let root = build(&[1, 2], &cmp, Structure::Leftist).unwrap();
        // An absent left and a leaf right both count as 0, so no swap happens.
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|n| n.post.num_likes()), Some(2));
        assert_eq!(root.npl, 1);
        assert!(verify_leftist(&Some(root)));
    }

    #[test]
    fn test_drain_order_both_structures() {
        let cmp = min_cmp();
        let likes = [5, 3, 9, 1, 7, 3, 8, 2, 6, 4, 0, 10];
        for structure in [Structure::Skew, Structure::Leftist] {
            let root = build(&likes, &cmp, structure);
            assert!(verify_heap_order(&root, &cmp));
            assert_eq!(count(&root), likes.len());
            let mut expected = likes.to_vec();
            expected.sort();
            assert_eq!(drain(root, &cmp, structure), expected);
        }
    }

    #[test]
    fn test_leftist_invariant_after_merges() {
        let cmp = min_cmp();
        let root = build(&(0..64).rev().collect::<Vec<_>>(), &cmp, Structure::Leftist);
        assert!(verify_leftist(&root));
        assert!(verify_heap_order(&root, &cmp));
    }

    #[test]
    fn test_rebuild_keeps_every_post() {
        let cmp = min_cmp();
        let root = build(&[4, 8, 15, 16, 23, 42], &cmp, Structure::Skew);
        let mut before: Vec<i32> = preorder(&root).iter().map(|n| n.post.post_id()).collect();
        before.sort();

        let max_cmp = Comparator {
            priority_fn: by_likes,
            heap_type: HeapType::MaxHeap,
        };
        let rebuilt = rebuild(root, &max_cmp, Structure::Leftist);
        assert!(verify_leftist(&rebuilt));
        assert!(verify_heap_order(&rebuilt, &max_cmp));

        let mut after: Vec<i32> = preorder(&rebuilt).iter().map(|n| n.post.post_id()).collect();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(drain(rebuilt, &max_cmp, Structure::Leftist), vec![42, 23, 16, 15, 8, 4]);
    }

    #[test]
    fn test_rebuild_empty() {
        let cmp = Comparator {
            priority_fn: priority_fn1,
            heap_type: HeapType::MinHeap,
        };
        assert!(rebuild(None, &cmp, Structure::Leftist).is_none());
    }

    #[test]
    fn test_deep_copy_mirrors_shape() {
        let cmp = min_cmp();
        for structure in [Structure::Skew, Structure::Leftist] {
            let root = build(&[9, 4, 7, 1, 8, 2, 6, 3, 5], &cmp, structure);
            let copy = deep_copy(&root);
            let shape = |link: &Link| -> Vec<(i32, Option<i32>, Option<i32>, usize)> {
                preorder(link)
                    .into_iter()
                    .map(|n| {
                        (
                            n.post.post_id(),
                            n.left.as_ref().map(|c| c.post.post_id()),
                            n.right.as_ref().map(|c| c.post.post_id()),
                            n.npl,
                        )
                    })
                    .collect()
            };
            assert_eq!(shape(&root), shape(&copy));
            assert!(deep_copy(&None).is_none());
        }
    }

    #[test]
    fn test_deep_chain_clone_does_not_overflow() {
        let mut root: Link = None;
        for i in 0..200_000 {
            let mut node = Node::singleton(post(i, i));
            node.right = root;
            root = Some(node);
        }
        let copy = root.clone();
        assert_eq!(count(&copy), 200_000);
        assert_eq!(copy.as_ref().map(|n| n.post.post_id()), Some(199_999));
    }

    #[test]
    fn test_deep_tree_drop_does_not_overflow() {
        let mut root: Link = None;
        for i in 0..200_000 {
            let mut node = Node::singleton(post(i, i));
            node.left = root;
            root = Some(node);
        }
        assert_eq!(count(&root), 200_000);
        drop(root);
    }
}

//! Queue configuration: ordering direction and tree structure
//!
//! Both are fixed at construction and can be changed later through
//! [`SQueue::set_priority_fn`](crate::SQueue::set_priority_fn) and
//! [`SQueue::set_structure`](crate::SQueue::set_structure), which rebuild
//! the tree under the new setting.

use crate::error::ParseConfigError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordering direction of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeapType {
    /// Smaller score = higher priority
    MinHeap,
    /// Larger score = higher priority
    MaxHeap,
}

/// Tree shape maintained by a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Structure {
    /// Children are swapped after every merge step
    Skew,
    /// Children are swapped only to keep `npl(left) >= npl(right)`
    Leftist,
}

/// Heap type and structure bundled together
///
/// # Example
///
/// ```rust
/// use rust_post_queue::{HeapType, QueueConfig, Structure};
///
/// let config: QueueConfig = QueueConfig {
///     heap_type: "max".parse().unwrap(),
///     structure: "skew".parse().unwrap(),
/// };
/// assert_eq!(config.heap_type, HeapType::MaxHeap);
/// assert_eq!(config.structure, Structure::Skew);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueueConfig {
    pub heap_type: HeapType,
    pub structure: Structure,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            heap_type: HeapType::MinHeap,
            structure: Structure::Leftist,
        }
    }
}

impl fmt::Display for HeapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapType::MinHeap => write!(f, "min"),
            HeapType::MaxHeap => write!(f, "max"),
        }
    }
}

impl FromStr for HeapType {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minheap" | "min-heap" => Ok(HeapType::MinHeap),
            "max" | "maxheap" | "max-heap" => Ok(HeapType::MaxHeap),
            _ => Err(ParseConfigError::new("heap type", s)),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Skew => write!(f, "skew"),
            Structure::Leftist => write!(f, "leftist"),
        }
    }
}

impl FromStr for Structure {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skew" => Ok(Structure::Skew),
            "leftist" => Ok(Structure::Leftist),
            _ => Err(ParseConfigError::new("structure", s)),
        }
    }
}

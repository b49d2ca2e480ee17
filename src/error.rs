//! Error types for queue operations
//!
//! Rejected posts are not errors: [`SQueue::insert_post`](crate::SQueue::insert_post)
//! reports them with a plain `false`. The variants here are reserved for
//! calls that violate a precondition of the queue itself.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Tried to take a post from a queue that holds none
    Empty,
    /// The merge source and target are the same queue
    SelfMerge,
    /// The queues differ in priority function, heap type or structure
    Incompatible,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::SelfMerge => write!(f, "cannot merge queue with itself"),
            QueueError::Incompatible => {
                write!(f, "incompatible queues cannot be merged")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Error returned when parsing a [`HeapType`](crate::HeapType) or
/// [`Structure`](crate::Structure) from a string fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfigError {
    kind: &'static str,
    input: String,
}

impl ParseConfigError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for ParseConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseConfigError {}

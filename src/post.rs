//! The ranked record type
//!
//! A [`Post`] is plain data: an identifier plus four attributes fixed at
//! construction. The queue never inspects the attributes itself; it only
//! passes posts to the active priority function.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MIN_POST_ID: i32 = 100_000;
pub const MAX_POST_ID: i32 = 999_999;
pub const MIN_LIKES: i32 = 0;
pub const MAX_LIKES: i32 = 500;
pub const MIN_CONNECT_LEVEL: i32 = 1;
pub const MAX_CONNECT_LEVEL: i32 = 5;
pub const MIN_TIME: i32 = 1;
pub const MAX_TIME: i32 = 50;
pub const MIN_INTEREST_LEVEL: i32 = 1;
pub const MAX_INTEREST_LEVEL: i32 = 10;

/// A post in a social feed
///
/// # Example
///
/// ```rust
/// use rust_post_queue::Post;
///
/// let post = Post::new(100_001, 42, 3, 12, 7);
/// assert_eq!(post.num_likes(), 42);
/// assert_eq!(
///     post.to_string(),
///     "Post#: 100001, likes#: 42, connect level: 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Post {
    id: i32,
    likes: i32,
    connect_level: i32,
    post_time: i32,
    interest_level: i32,
}

impl Post {
    pub fn new(
        id: i32,
        likes: i32,
        connect_level: i32,
        post_time: i32,
        interest_level: i32,
    ) -> Self {
        Self {
            id,
            likes,
            connect_level,
            post_time,
            interest_level,
        }
    }

    pub fn post_id(&self) -> i32 {
        self.id
    }

    pub fn num_likes(&self) -> i32 {
        self.likes
    }

    pub fn connect_level(&self) -> i32 {
        self.connect_level
    }

    /// Age of the post in hours
    pub fn post_time(&self) -> i32 {
        self.post_time
    }

    pub fn interest_level(&self) -> i32 {
        self.interest_level
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post#: {}, likes#: {}, connect level: {}",
            self.id, self.likes, self.connect_level
        )
    }
}

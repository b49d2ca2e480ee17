//! Post feed walkthrough
//!
//! Fills a queue with generated posts, prints it, switches the ranking and
//! structure, and merges in a second queue.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example post_feed
//! cargo run --example post_feed -- max skew
//! ```

use rust_post_queue::{
    priority_fn1, priority_fn2, HeapType, PostGenerator, QueueConfig, SQueue, Structure,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let defaults = QueueConfig::default();
    let config = QueueConfig {
        heap_type: args
            .next()
            .map(|s| s.parse::<HeapType>())
            .transpose()?
            .unwrap_or(defaults.heap_type),
        structure: args
            .next()
            .map(|s| s.parse::<Structure>())
            .transpose()?
            .unwrap_or(defaults.structure),
    };
    println!("Queue: {} {}", config.heap_type, config.structure);

    let mut generator = PostGenerator::new();
    let mut queue = SQueue::with_config(priority_fn2, config);
    for post in generator.random_posts(10) {
        queue.insert_post(&post);
    }
    print!("{}", queue);
    println!("Dump: {}", queue.dump());

    queue.set_priority_fn(priority_fn1, HeapType::MaxHeap);
    queue.set_structure(Structure::Skew);
    println!("\nAfter switching to priority_fn1, max, skew:");
    print!("{}", queue);

    let mut other = SQueue::new(priority_fn1, HeapType::MaxHeap, Structure::Skew);
    for post in generator.random_posts(5) {
        other.insert_post(&post);
    }
    queue.merge_with_queue(&mut other)?;
    println!("\nMerged {} posts, donor left with {}", queue.num_posts(), other.num_posts());

    println!("\nFeed order:");
    while let Ok(post) = queue.get_next_post() {
        println!("[{}] {}", priority_fn1(&post), post);
    }
    Ok(())
}

//! Crawl frontier: the FIFO queue of pending URLs and the visited set
//!
//! Entries are dequeued strictly in insertion order, which makes the crawl
//! breadth-first. Duplicates may sit in the queue; the visited set, keyed
//! by normalized URL, guarantees each page is fetched at most once.

use crate::url::visit_key;
use std::collections::{HashSet, VecDeque};

/// A URL queued for fetching with its link depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Absolute URL to fetch
    pub url: String,

    /// Number of link hops from the root URL
    pub depth: u32,
}

/// FIFO frontier with a visited set
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with the root URL at depth 0
    pub fn new(root_url: &str) -> Self {
        let mut frontier = Self::default();
        frontier.push(root_url.to_string(), 0);
        frontier
    }

    /// Appends a URL to the back of the queue
    pub fn push(&mut self, url: String, depth: u32) {
        self.queue.push_back(FrontierEntry { url, depth });
    }

    /// Removes the oldest entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Marks a URL as visited
    ///
    /// # Returns
    ///
    /// `true` if the URL had not been visited before
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(visit_key(url))
    }

    /// Checks whether a URL has been visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(&visit_key(url))
    }

    /// Number of entries waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of distinct URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

//! Core utilities for the IPL statistics CLI
//!
//! - `cache`: content-hash keyed memoization used by the pipeline

pub mod cache;

pub use cache::{CacheStats, ContentHash, MemoCache};

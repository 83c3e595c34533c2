//! Topic handling module
//!
//! This module provides components for matching MQTT topics against
//! subscription patterns and extracting the values bound to each wildcard.

// Submodules
pub mod error;
pub mod topic_match;
pub mod topic_matcher;
pub mod topic_pattern_item;
/// Topic pattern parsing and matching
pub mod topic_pattern_path;

#[cfg(test)]
mod topic_matcher_tests;


// Re-export commonly used types for convenience
pub use error::{MatchResult, TopicMismatch};
pub use topic_match::{TopicMatch, TopicPath};
pub use topic_matcher::{is_match, match_topic};
pub use topic_pattern_item::TopicPatternItem;
pub use topic_pattern_path::{CacheStrategy, TopicPatternPath};

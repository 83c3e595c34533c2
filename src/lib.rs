//! # MQTT Wildcard
//!
//! Matching of MQTT topics against subscription patterns, with extraction of
//! the values each wildcard consumed.
//!
//! ## Pattern Matching
//!
//! - `+` matches exactly one topic level, which may be empty
//!   (e.g. `sensors/+/temperature`)
//! - `#` as the last level matches the rest of the topic (e.g. `sensors/#`)
//!
//! Everything else is compared literally and case-sensitively. Topics and
//! patterns are split on `/` with empty levels kept, so `/a/` has three levels.
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_wildcard::match_topic;
//!
//! let captures = match_topic("home/kitchen/temp/celsius", "home/+/#");
//! assert_eq!(captures, Some(vec!["kitchen".to_string(), "temp/celsius".to_string()]));
//!
//! // A match without wildcards is distinct from no match at all
//! assert_eq!(match_topic("home/kitchen", "home/kitchen"), Some(vec![]));
//! assert_eq!(match_topic("home/kitchen", "home"), None);
//! ```
//!
//! ## Reusing a Pattern
//!
//! A subscription layer that checks the same pattern against many topics can
//! tokenize it once and optionally cache matches:
//!
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use mqtt_wildcard::{CacheStrategy, TopicPatternPath};
//!
//! let size = NonZeroUsize::new(64).unwrap();
//! let pattern = TopicPatternPath::with_cache("devices/+/state", CacheStrategy::Lru(size));
//!
//! let m = pattern.matches("devices/lamp/state").unwrap();
//! assert_eq!(m.get_param(0).unwrap().as_str(), "lamp");
//! assert!(pattern.matches("devices/lamp/power").is_none());
//! ```

#![warn(missing_docs)]

pub mod topic;

// === Core Public API ===
pub use topic::{is_match, match_topic};

// Pattern and match types (for repeated matching and zero-copy captures)
pub use topic::{
	CacheStrategy, TopicMatch, TopicPath, TopicPatternItem, TopicPatternPath,
};

// Mismatch diagnostics
pub use topic::{MatchResult, TopicMismatch};

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_wildcard::prelude::*;
/// ```
pub mod prelude {
	//! Essential types for most uses

	pub use crate::{
		CacheStrategy, TopicMatch, TopicPatternPath, is_match, match_topic,
	};
}

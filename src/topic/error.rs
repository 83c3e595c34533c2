//! Error types for the topic module
//!
//! A topic failing to match a pattern is an ordinary outcome. The
//! [`TopicMismatch`] type only exists so that callers who want to know *why*
//! a pair did not match (for logging or debugging subscriptions) can ask.

use thiserror::Error;

/// Reason a topic did not match a pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicMismatch {
	/// The pattern still had a literal or `+` segment but the topic ran out
	#[error("Topic ended before pattern segment {position}")]
	UnexpectedEndOfTopic {
		/// Index of the pattern segment that found no topic segment
		position: usize,
	},

	/// The pattern was exhausted without `#` while topic segments remained
	#[error("Pattern ended with {remaining} topic segment(s) left over")]
	UnexpectedEndOfPattern {
		/// Number of unconsumed topic segments
		remaining: usize,
	},

	/// A literal pattern segment differs from the topic segment
	#[error(
		"Segment mismatch at position {position}: expected '{expected}', \
		 found '{found}'"
	)]
	SegmentMismatch {
		/// Literal from the pattern
		expected: String,
		/// Segment from the topic
		found: String,
		/// Segment index
		position: usize,
	},
}

impl TopicMismatch {
	/// Creates a new UnexpectedEndOfTopic mismatch
	pub fn end_of_topic(position: usize) -> Self {
		Self::UnexpectedEndOfTopic { position }
	}

	/// Creates a new UnexpectedEndOfPattern mismatch
	pub fn end_of_pattern(remaining: usize) -> Self {
		Self::UnexpectedEndOfPattern { remaining }
	}

	/// Creates a new SegmentMismatch
	pub fn segment_mismatch(
		expected: impl Into<String>,
		found: impl Into<String>,
		position: usize,
	) -> Self {
		Self::SegmentMismatch {
			expected: expected.into(),
			found: found.into(),
			position,
		}
	}

	/// Returns the mismatch kind for categorization
	pub fn kind(&self) -> &'static str {
		match self {
			| TopicMismatch::UnexpectedEndOfTopic { .. } => "end_of_topic",
			| TopicMismatch::UnexpectedEndOfPattern { .. } => "end_of_pattern",
			| TopicMismatch::SegmentMismatch { .. } => "segment_mismatch",
		}
	}
}

/// Convenient Result type for diagnostic match operations
pub type MatchResult<T> = Result<T, TopicMismatch>;

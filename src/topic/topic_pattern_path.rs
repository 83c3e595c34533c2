use std::num::NonZeroUsize;
use std::slice::Iter;
use std::sync::{Arc, Mutex, PoisonError};

use arcstr::ArcStr;
use lru::LruCache;
use smallvec::SmallVec;
use tracing::trace;

use super::error::{MatchResult, TopicMismatch};
use super::topic_match::{TopicMatch, TopicPath};
use super::topic_pattern_item::TopicPatternItem;

/// Whether a [`TopicPatternPath`] remembers its successful matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheStrategy {
	/// Walk the pattern for every topic
	#[default]
	NoCache,
	/// Keep up to this many matches, evicting the least recently used
	Lru(NonZeroUsize),
}

/// A subscription pattern tokenized once and matched against many topics.
#[derive(Debug)]
pub struct TopicPatternPath {
	pattern: ArcStr,
	segments: Vec<TopicPatternItem>,
	match_cache: Option<Mutex<LruCache<ArcStr, Arc<TopicMatch>>>>,
}

impl TopicPatternPath {
	/// Tokenizes `pattern` on `/`. Never fails: every string is a pattern.
	pub fn new(pattern: impl Into<ArcStr>) -> Self {
		Self::with_cache(pattern, CacheStrategy::NoCache)
	}

	/// Tokenizes `pattern` and sets up the match cache `cache_strategy` asks
	/// for.
	pub fn with_cache(
		pattern: impl Into<ArcStr>,
		cache_strategy: CacheStrategy,
	) -> Self {
		let pattern = pattern.into();
		let last = pattern.split('/').count() - 1;
		let segments = pattern
			.split('/')
			.enumerate()
			.map(|(i, s)| {
				TopicPatternItem::parse(pattern.substr_from(s), i == last)
			})
			.collect();

		let match_cache = match cache_strategy {
			| CacheStrategy::NoCache => None,
			| CacheStrategy::Lru(size) => {
				Some(Mutex::new(LruCache::new(size)))
			}
		};

		Self {
			pattern,
			segments,
			match_cache,
		}
	}

	/// Original pattern text
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	/// Never true: `""` is a pattern of one empty literal segment
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Segments in pattern order
	pub fn iter(&self) -> Iter<'_, TopicPatternItem> {
		self.segments.iter()
	}

	/// Number of segments
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Segments as a slice
	pub fn slice(&self) -> &[TopicPatternItem] {
		&self.segments
	}

	/// Number of `+` and terminal `#` segments
	pub fn wildcard_count(&self) -> usize {
		self.segments.iter().filter(|s| s.is_wildcard()).count()
	}

	/// Returns true if the pattern ends with a `#` wildcard
	pub fn has_hash_wildcard(&self) -> bool {
		matches!(self.segments.last(), Some(TopicPatternItem::Hash))
	}

	/// Matches `topic` and explains the failure when it does not match.
	///
	/// With [`CacheStrategy::Lru`] a repeated topic returns the same
	/// [`Arc<TopicMatch>`] without walking the pattern again.
	pub fn try_match(
		&self,
		topic: Arc<TopicPath>,
	) -> MatchResult<Arc<TopicMatch>> {
		let Some(cache) = &self.match_cache else {
			return self.try_match_internal(topic).map(Arc::new);
		};

		{
			let mut match_cache =
				cache.lock().unwrap_or_else(PoisonError::into_inner);
			if let Some(cached_match) = match_cache.get(topic.as_str()) {
				trace!(topic = %topic, pattern = %self, "Match cache hit");
				return Ok(cached_match.clone());
			}
		}

		let topic_match = Arc::new(self.try_match_internal(topic.clone())?);
		{
			let mut match_cache =
				cache.lock().unwrap_or_else(PoisonError::into_inner);
			match_cache.put(topic.path(), Arc::clone(&topic_match));
		}
		Ok(topic_match)
	}

	/// Matches `topic`, returning `None` when it does not match.
	pub fn matches(
		&self,
		topic: impl Into<ArcStr>,
	) -> Option<Arc<TopicMatch>> {
		let topic = Arc::new(TopicPath::new(topic));
		match self.try_match(topic.clone()) {
			| Ok(topic_match) => Some(topic_match),
			| Err(reason) => {
				trace!(
					topic = %topic,
					pattern = %self,
					reason = reason.kind(),
					"Topic does not match pattern: {reason}"
				);
				None
			}
		}
	}

	/// Owned wildcard captures of `topic`, in pattern order.
	///
	/// `None` means no match. `Some(vec![])` means a match that captured
	/// nothing, as with a pattern free of wildcards.
	pub fn captures(&self, topic: impl Into<ArcStr>) -> Option<Vec<String>> {
		self.matches(topic).map(|topic_match| topic_match.to_vec())
	}

	fn try_match_internal(
		&self,
		topic: Arc<TopicPath>,
	) -> MatchResult<TopicMatch> {
		let topic_segments = topic.segments();
		let mut params = SmallVec::new();
		for (position, pattern_segment) in self.iter().enumerate() {
			match pattern_segment {
				| TopicPatternItem::Str(expected) => {
					let found = topic_segments
						.get(position)
						.ok_or_else(|| TopicMismatch::end_of_topic(position))?;
					if found.as_str() != expected.as_str() {
						return Err(TopicMismatch::segment_mismatch(
							expected.as_str(),
							found.as_str(),
							position,
						));
					}
				}
				| TopicPatternItem::Plus => {
					if position >= topic_segments.len() {
						return Err(TopicMismatch::end_of_topic(position));
					}
					params.push(position .. position + 1);
				}
				| TopicPatternItem::Hash => {
					// Nothing left for `#` to consume: still a match, but no
					// capture is recorded for it.
					if position < topic_segments.len() {
						params.push(position .. topic_segments.len());
					}
					return Ok(TopicMatch::from_match_result(topic, params));
				}
			}
		}
		if self.len() < topic_segments.len() {
			return Err(TopicMismatch::end_of_pattern(
				topic_segments.len() - self.len(),
			));
		}
		Ok(TopicMatch::from_match_result(topic, params))
	}
}

impl std::fmt::Display for TopicPatternPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

impl From<&str> for TopicPatternPath {
	fn from(pattern: &str) -> Self {
		Self::new(pattern)
	}
}

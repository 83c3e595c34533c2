//! Tokenized topics and the captures of a successful match

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use arcstr::{ArcStr, Substr};
use smallvec::SmallVec;

/// A concrete topic split on `/`, with empty segments preserved.
///
/// Segments are [`Substr`] handles on the full path, and each segment's byte
/// span is recorded while splitting, so capturing never copies topic text.
/// Empty segments have no usable position of their own in a `Substr`; the
/// recorded spans are what multi-segment captures are sliced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPath {
	path: ArcStr,
	segments: Vec<Substr>,
	spans: Vec<Range<usize>>,
}

impl TopicPath {
	/// Splits `path` into segments. `""` is a single empty segment and
	/// `"/a/"` is `["", "a", ""]`.
	pub fn new(path: impl Into<ArcStr>) -> Self {
		let path = path.into();
		let mut spans = Vec::new();
		let mut offset = 0;
		for segment in path.split('/') {
			spans.push(offset .. offset + segment.len());
			offset += segment.len() + 1;
		}
		let segments =
			spans.iter().map(|span| path.substr(span.clone())).collect();
		Self {
			path,
			segments,
			spans,
		}
	}

	/// Full topic string
	pub fn as_str(&self) -> &str {
		&self.path
	}

	/// Shared handle to the full topic string
	pub fn path(&self) -> ArcStr {
		self.path.clone()
	}

	/// Segments in topic order
	pub fn segments(&self) -> &[Substr] {
		&self.segments
	}

	/// Byte span of each segment within the full topic string
	pub fn spans(&self) -> &[Range<usize>] {
		&self.spans
	}

	/// Number of segments, always at least one
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Never true: a topic has at least one segment
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}
}

impl fmt::Display for TopicPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path)
	}
}

impl From<&str> for TopicPath {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

/// Captured wildcard values of a successful match, in pattern order.
///
/// Each capture is stored as a range of topic segments. A `+` capture spans
/// one segment, a `#` capture spans the rest of the topic.
pub struct TopicMatch {
	topic: Arc<TopicPath>,
	params: SmallVec<[Range<usize>; 3]>,
}

impl TopicMatch {
	pub(crate) fn from_match_result(
		topic: Arc<TopicPath>,
		params: SmallVec<[Range<usize>; 3]>,
	) -> Self {
		Self { topic, params }
	}

	/// The topic this match was produced from
	pub fn topic(&self) -> &TopicPath {
		&self.topic
	}

	/// Number of captures
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// True when the pattern matched without capturing anything
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	fn get_param_range(&self, range: &Range<usize>) -> Substr {
		match range.len() {
			| 0 => self.topic.path.substr(0 .. 0),
			| 1 => self.topic.segments[range.start].clone(),
			| _ => {
				let spans = &self.topic.spans;
				let start = spans[range.start].start;
				let end = spans[range.end - 1].end;
				self.topic.path.substr(start .. end)
			}
		}
	}

	/// Capture at `index`, or `None` past the last capture.
	///
	/// Multi-segment captures are returned with their inner `/` delimiters,
	/// exactly as they appear in the topic.
	pub fn get_param(&self, index: usize) -> Option<Substr> {
		self.params
			.get(index)
			.map(|range| self.get_param_range(range))
	}

	/// Captures in pattern order
	pub fn iter(&self) -> impl Iterator<Item = Substr> + '_ {
		self.params.iter().map(|range| self.get_param_range(range))
	}

	/// Owned copies of all captures
	pub fn to_vec(&self) -> Vec<String> {
		self.iter().map(|param| param.to_string()).collect()
	}
}

impl fmt::Debug for TopicMatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TopicMatch {{ topic: {}, params: [", self.topic.path)?;
		for (i, param) in self.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{:?}", param.as_str())?;
		}
		write!(f, "] }}")
	}
}

impl fmt::Display for TopicMatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Match({})", self.topic.path)?;

		if !self.params.is_empty() {
			write!(f, " with {} params", self.params.len())?;
		}

		Ok(())
	}
}

//! MQTT topic pattern segment types

use arcstr::Substr;

/// One segment of a subscription pattern: a literal or a wildcard.
///
/// Wildcards are recognised only when the whole segment is exactly `+` or
/// exactly `#`. Anything else, `a+b` or `#x` included, is a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicPatternItem {
	/// Literal segment, compared byte-exactly
	Str(Substr),
	/// Single-level wildcard `+`
	Plus,
	/// Multi-level wildcard `#`, only ever the last segment of a pattern
	Hash,
}

impl TopicPatternItem {
	/// Classifies a pattern segment.
	///
	/// `is_last` tells whether the segment ends the pattern. A `#` anywhere
	/// else stays a literal that only matches a topic segment equal to `#`.
	pub fn parse(segment: Substr, is_last: bool) -> Self {
		match segment.as_str() {
			| "+" => TopicPatternItem::Plus,
			| "#" if is_last => TopicPatternItem::Hash,
			| _ => TopicPatternItem::Str(segment),
		}
	}

	/// Returns string representation of the pattern item.
	pub fn as_str(&self) -> &str {
		match self {
			| TopicPatternItem::Str(s) => s,
			| TopicPatternItem::Plus => "+",
			| TopicPatternItem::Hash => "#",
		}
	}

	/// Returns true if this item is a wildcard (+ or #).
	pub fn is_wildcard(&self) -> bool {
		matches!(self, TopicPatternItem::Plus | TopicPatternItem::Hash)
	}
}

impl From<&TopicPatternItem> for String {
	fn from(item: &TopicPatternItem) -> Self {
		item.as_str().to_string()
	}
}

impl std::fmt::Display for TopicPatternItem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

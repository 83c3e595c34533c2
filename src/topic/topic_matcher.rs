//! Single topic / single pattern matching on plain strings

use super::topic_pattern_path::TopicPatternPath;

/// Matches `topic` against `pattern` and returns the wildcard captures.
///
/// Both strings are split on `/` with empty segments kept. `+` takes exactly
/// one topic segment (possibly empty), a final `#` takes the rest of the topic
/// joined back with `/`. A `#` with nothing left to take still matches but
/// adds no capture.
///
/// Returns `None` when the topic does not match, and `Some(vec![])` when it
/// matches a pattern that captured nothing.
///
/// ```
/// use mqtt_wildcard::match_topic;
///
/// assert_eq!(match_topic("test/foo/bar", "test/+/bar"), Some(vec!["foo".into()]));
/// assert_eq!(
/// 	match_topic("test/foo/bar/baz", "test/+/#"),
/// 	Some(vec!["foo".into(), "bar/baz".into()])
/// );
/// assert_eq!(match_topic("test/123", "test/123"), Some(vec![]));
/// assert_eq!(match_topic("test/foo/bar", "test/+"), None);
/// ```
pub fn match_topic(topic: &str, pattern: &str) -> Option<Vec<String>> {
	TopicPatternPath::new(pattern).captures(topic)
}

/// Returns true if `topic` matches `pattern`.
pub fn is_match(topic: &str, pattern: &str) -> bool {
	TopicPatternPath::new(pattern).matches(topic).is_some()
}

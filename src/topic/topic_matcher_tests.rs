use proptest::prelude::*;

use super::{TopicPatternPath, is_match, match_topic};

fn captures(values: &[&str]) -> Option<Vec<String>> {
	Some(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn test_exact_matches() {
	assert_eq!(match_topic("test/123", "test/123"), captures(&[]));
	assert_eq!(match_topic("test/test/test", "test/test"), None);
	assert_eq!(match_topic("test/test", "test/test/test"), None);
	assert!(is_match("sensors/temperature", "sensors/temperature"));
	assert!(!is_match("sensors/pressure", "sensors/temperature"));
}

#[test]
fn test_literals_are_case_sensitive() {
	assert_eq!(match_topic("Test/a", "test/a"), None);
	assert_eq!(match_topic("test/A", "test/+"), captures(&["A"]));
}

#[test]
fn test_plus_wildcards() {
	assert_eq!(
		match_topic("test/test/test", "test/+/+"),
		captures(&["test", "test"])
	);
	assert_eq!(
		match_topic("test/foo/bar/baz", "test/+/+/baz"),
		captures(&["foo", "bar"])
	);
	assert_eq!(match_topic("test/", "test/+"), captures(&[""]));
	assert_eq!(match_topic("test/foo/bar", "test/+"), None);
	assert_eq!(match_topic("test", "/+"), None);
}

#[test]
fn test_hash_wildcards() {
	assert_eq!(match_topic("/", "/#"), captures(&[""]));
	assert_eq!(match_topic("test/test", "test/test/#"), captures(&[]));
	assert_eq!(
		match_topic("test/foo/bar/baz", "test/+/#"),
		captures(&["foo", "bar/baz"])
	);
	assert_eq!(match_topic("test", "/#"), None);
	assert_eq!(match_topic("", "test/#"), None);
}

#[test]
fn test_hash_capture_with_empty_edge_segments() {
	assert_eq!(match_topic("/test/", "/#"), captures(&["test/"]));
	assert_eq!(match_topic("/test/", "#"), captures(&["/test/"]));
	assert_eq!(match_topic("a/b/", "a/#"), captures(&["b/"]));
	assert_eq!(match_topic("//", "#"), captures(&["//"]));
	assert_eq!(match_topic("a//b", "+/#"), captures(&["a", "/b"]));
}

#[test]
fn test_empty_topic_and_pattern() {
	assert_eq!(match_topic("", ""), captures(&[]));
	assert_eq!(match_topic("", "+"), captures(&[""]));
	assert_eq!(match_topic("", "#"), captures(&[""]));
	assert_eq!(match_topic("a", ""), None);
}

#[test]
fn test_wildcard_characters_inside_segments_are_literal() {
	assert_eq!(match_topic("a+b/c", "a+b/c"), captures(&[]));
	assert_eq!(match_topic("ab/c", "a+b/c"), None);
	assert_eq!(match_topic("x/a#", "x/a#"), captures(&[]));
	assert_eq!(match_topic("x/a/b", "x/a#"), None);
}

#[test]
fn test_inner_hash_is_literal() {
	assert_eq!(match_topic("a/#/b", "a/#/b"), captures(&[]));
	assert_eq!(match_topic("a/x/b", "a/#/b"), None);
	assert_eq!(match_topic("#/x", "#/+"), captures(&["x"]));
}

fn segment() -> impl Strategy<Value = String> {
	"[a-z0-9]{0,6}"
}

prop_compose! {
	fn arb_segments()(
		segments in prop::collection::vec(segment(), 1 .. 6),
	) -> Vec<String> {
		segments
	}
}

/// Topic segments, which of them become `+` in the pattern, and where a
/// trailing `#` cuts the pattern short (if anywhere).
fn arb_topic_and_pattern()
-> impl Strategy<Value = (Vec<String>, Vec<bool>, Option<usize>)> {
	arb_segments().prop_flat_map(|segments| {
		let len = segments.len();
		(
			Just(segments),
			prop::collection::vec(any::<bool>(), len),
			prop::option::of(0 ..= len),
		)
	})
}

proptest! {
	#[test]
	fn test_topic_matches_itself(segments in arb_segments()) {
		let topic = segments.join("/");
		prop_assert_eq!(match_topic(&topic, &topic), Some(vec![]));
	}

	#[test]
	fn test_hash_captures_whole_topic(segments in arb_segments()) {
		let topic = segments.join("/");
		prop_assert_eq!(match_topic(&topic, "#"), Some(vec![topic.clone()]));
	}

	#[test]
	fn test_plus_matches_single_segment_only(segments in arb_segments()) {
		let topic = segments.join("/");
		let expected = (segments.len() == 1).then(|| vec![topic.clone()]);
		prop_assert_eq!(match_topic(&topic, "+"), expected);
	}

	#[test]
	fn test_derived_pattern_captures_in_order(
		(segments, plus_mask, hash_at) in arb_topic_and_pattern(),
	) {
		let cut = hash_at.unwrap_or(segments.len());
		let mut pattern: Vec<&str> = segments[.. cut]
			.iter()
			.zip(&plus_mask)
			.map(|(s, plus)| if *plus { "+" } else { s.as_str() })
			.collect();
		let mut expected: Vec<String> = segments[.. cut]
			.iter()
			.zip(&plus_mask)
			.filter(|(_, plus)| **plus)
			.map(|(s, _)| s.clone())
			.collect();
		if hash_at.is_some() {
			pattern.push("#");
			if cut < segments.len() {
				expected.push(segments[cut ..].join("/"));
			}
		}

		let topic = segments.join("/");
		let pattern = pattern.join("/");
		let result = match_topic(&topic, &pattern);
		prop_assert_eq!(&result, &Some(expected));

		let wildcards = TopicPatternPath::new(pattern.as_str()).wildcard_count();
		let captured = result.map(|c| c.len()).unwrap_or_default();
		let hash_consumed_nothing = hash_at == Some(segments.len());
		prop_assert_eq!(captured + usize::from(hash_consumed_nothing), wildcards);
	}

	#[test]
	fn test_matching_is_idempotent(
		topic in arb_segments(),
		pattern in prop::collection::vec(
			prop_oneof![segment(), Just("+".to_string()), Just("#".to_string())],
			1 .. 6,
		),
	) {
		let topic = topic.join("/");
		let pattern = pattern.join("/");
		prop_assert_eq!(
			match_topic(&topic, &pattern),
			match_topic(&topic, &pattern)
		);
	}

	#[test]
	fn test_extra_topic_segment_needs_hash(segments in arb_segments()) {
		let pattern = segments.join("/");
		let topic = format!("{pattern}/extra");
		prop_assert_eq!(match_topic(&topic, &pattern), None);
		prop_assert_eq!(
			match_topic(&topic, &format!("{pattern}/#")),
			Some(vec!["extra".to_string()])
		);
	}
}

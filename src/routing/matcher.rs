//! Path pattern matching.
//!
//! # Responsibilities
//! - Compare a request path against a route pattern
//! - Capture the path segments matched by wildcards
//! - Validate the shape of custom patterns
//!
//! # Design Decisions
//! - Segments are delimited by `/`; leading and trailing slashes yield empty segments
//! - An empty string has no segments at all, so it only matches itself
//! - Segments are not whitespace-trimmed
//! - `*` matches exactly one segment (including an empty one)
//! - Literal segments are case-sensitive, byte-equal
//! - Segment counts must agree, so no backtracking is ever needed

use thiserror::Error;

/// The single-segment wildcard marker.
pub const WILDCARD: &str = "*";

/// Splits `s` on `/`. The empty string yields no segments.
fn segments(s: &str) -> impl Iterator<Item = &str> {
    (!s.is_empty()).then(|| s.split('/')).into_iter().flatten()
}

/// Returns true if `path` matches `pattern`.
pub fn match_pattern(path: &str, pattern: &str) -> bool {
    if segments(path).count() != segments(pattern).count() {
        return false;
    }

    segments(path)
        .zip(segments(pattern))
        .all(|(segment, expected)| expected == WILDCARD || segment == expected)
}

/// Returns the path segments matched by the wildcards of `pattern`, in order,
/// or `None` if the path does not match.
pub fn captures<'p>(path: &'p str, pattern: &str) -> Option<Vec<&'p str>> {
    if !match_pattern(path, pattern) {
        return None;
    }

    Some(
        segments(path)
            .zip(segments(pattern))
            .filter(|(_, expected)| *expected == WILDCARD)
            .map(|(segment, _)| segment)
            .collect(),
    )
}

/// Shape problems found in a custom route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern '{0}' must begin with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern '{pattern}' has an empty segment at position {position}")]
    EmptySegment { pattern: String, position: usize },

    /// A segment such as `key*`. The matcher treats it as a literal.
    #[error("pattern '{pattern}' has partial wildcard segment '{segment}'")]
    PartialWildcard { pattern: String, segment: String },
}

/// Checks that a pattern is well formed.
///
/// A trailing slash is allowed (its empty segment only matches a path that
/// also ends with `/`), but empty segments in between are not.
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
    }

    let parts: Vec<&str> = pattern.split('/').skip(1).collect();
    let last = parts.len().saturating_sub(1);

    for (index, segment) in parts.iter().enumerate() {
        if segment.is_empty() && index != last {
            return Err(PatternError::EmptySegment {
                pattern: pattern.to_string(),
                position: index + 1,
            });
        }
        if segment.contains('*') && *segment != WILDCARD {
            return Err(PatternError::PartialWildcard {
                pattern: pattern.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_count_mismatch() {
        assert!(!match_pattern("/a/b", "/a"));
        assert!(!match_pattern("/session/xyz/window", "/session/*"));
        assert!(!match_pattern("/status/", "/status"));
    }

    #[test]
    fn test_wildcard_matches_one_segment() {
        assert!(match_pattern("/session/xyz", "/session/*"));
        assert!(match_pattern("/session/", "/session/*")); // empty segment
        assert!(match_pattern("/session/1/element/2/text", "/session/*/element/*/text"));
        assert!(!match_pattern("/session/1/element/2/name", "/session/*/element/*/text"));
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert!(match_pattern("/status", "/status"));
        assert!(!match_pattern("/Status", "/status"));
        assert!(!match_pattern("status", "/status"));
    }

    #[test]
    fn test_partial_wildcard_is_literal() {
        assert!(!match_pattern("/storage/key1", "/storage/key*"));
        assert!(match_pattern("/storage/key*", "/storage/key*"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_pattern("", ""));
        assert!(!match_pattern("", "*"));
        assert!(!match_pattern("", "/"));
        assert!(!match_pattern("/", ""));
        assert_eq!(captures("", ""), Some(vec![]));
    }

    #[test]
    fn test_captures() {
        assert_eq!(
            captures("/session/42/element/7/css/color", "/session/*/element/*/css/*"),
            Some(vec!["42", "7", "color"])
        );
        assert_eq!(captures("/status", "/status"), Some(vec![]));
        assert_eq!(captures("/session/42", "/status"), None);
    }

    #[test]
    fn test_validate_pattern() {
        assert!(validate_pattern("/session/*/title").is_ok());
        assert!(validate_pattern("/session/*/").is_ok());
        assert_eq!(validate_pattern(""), Err(PatternError::Empty));
        assert_eq!(
            validate_pattern("session/*"),
            Err(PatternError::MissingLeadingSlash("session/*".into()))
        );
        assert_eq!(
            validate_pattern("/session//title"),
            Err(PatternError::EmptySegment {
                pattern: "/session//title".into(),
                position: 2,
            })
        );
        assert_eq!(
            validate_pattern("/session/*/local_storage/key*"),
            Err(PatternError::PartialWildcard {
                pattern: "/session/*/local_storage/key*".into(),
                segment: "key*".into(),
            })
        );
    }
}

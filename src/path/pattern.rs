//! Compiled route patterns.
//!
//! # Responsibilities
//! - Compile a route path (`/users/:id`) into a segment matcher
//! - Boolean test against a pathname (candidate discovery)
//! - Named-capture extraction (parameter retrieval)
//!
//! # Design Decisions
//! - A `:name` segment matches exactly one non-slash pathname segment
//! - Literal segments compare byte-for-byte, consistent with plain paths
//! - Trailing slashes on the input pathname are stripped before testing,
//!   except for the root `/`

use crate::path::normalize::normalize_path;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A route path compiled for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

/// Successful match of a pathname against a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCaptures {
    /// The pathname that matched, as tested.
    pub matched: String,
    /// Extracted `:name` parameters, in pattern order.
    pub named: Vec<(String, String)>,
}

impl PathPattern {
    /// Compile a path pattern. The pattern is normalized first, so
    /// registration-time paths and author-written patterns behave alike.
    pub fn compile(pattern: &str) -> Self {
        let segments = normalize_path(pattern)
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Whether the pathname matches this pattern.
    pub fn is_match(&self, pathname: &str) -> bool {
        self.captures(pathname).is_some()
    }

    /// Test a pathname and extract named captures.
    pub fn captures(&self, pathname: &str) -> Option<PathCaptures> {
        let trimmed = match pathname.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => pathname,
        };
        let parts: Vec<&str> = trimmed.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut named = Vec::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => named.push((name.clone(), (*part).to_string())),
            }
        }
        Some(PathCaptures {
            matched: trimmed.to_string(),
            named,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_segment_matches_and_extracts() {
        let pattern = PathPattern::compile("/users/:id");
        let captures = pattern.captures("/users/42").unwrap();
        assert_eq!(captures.named, vec![("id".to_string(), "42".to_string())]);
        assert_eq!(captures.matched, "/users/42");

        assert!(!pattern.is_match("/users"));
        assert!(!pattern.is_match("/users/42/posts"));
    }

    #[test]
    fn test_param_matches_one_segment_only() {
        let pattern = PathPattern::compile("/files/:name");
        assert!(pattern.is_match("/files/readme"));
        assert!(!pattern.is_match("/files/a/b"));
    }

    #[test]
    fn test_literal_mismatch() {
        let pattern = PathPattern::compile("/users/:id");
        assert!(!pattern.is_match("/accounts/42"));
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::compile("/");
        assert!(pattern.is_match("/"));
        assert!(!pattern.is_match("/about"));
    }

    #[test]
    fn test_trailing_slash_stripped_from_input() {
        let pattern = PathPattern::compile("/about");
        assert!(pattern.is_match("/about/"));
        assert_eq!(pattern.captures("/about/").unwrap().matched, "/about");
    }

    #[test]
    fn test_multiple_params() {
        let pattern = PathPattern::compile("/users/:user/posts/:post");
        let captures = pattern.captures("/users/7/posts/99").unwrap();
        assert_eq!(
            captures.named,
            vec![
                ("user".to_string(), "7".to_string()),
                ("post".to_string(), "99".to_string()),
            ]
        );
    }
}

//! Literal-or-pattern comparison targets.
//!
//! A [`Criterion`] is what a field matcher compares a value against. Literals
//! come from strings, patterns from compiled [`Regex`]es:
//!
//! ```
//! use email_matchers::{Criterion, LiteralRule};
//! use regex::Regex;
//!
//! let literal = Criterion::from("foo");
//! assert!(literal.is_match("foo", LiteralRule::Equals));
//! assert!(!literal.is_match("foobar", LiteralRule::Equals));
//! assert!(literal.is_match("foobar", LiteralRule::Contains));
//!
//! let pattern = Criterion::from(Regex::new("o+b").unwrap());
//! assert!(pattern.is_match("foobar", LiteralRule::Equals));
//! ```

use crate::error::{Error, Result};
use crate::format;
use regex::Regex;

/// How a literal criterion is compared with a field value.
///
/// Patterns ignore this and always search the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralRule {
    /// The value must equal the literal.
    Equals,
    /// The value must contain the literal.
    Contains,
}

/// A literal value or a pattern to compare a field against.
#[derive(Debug, Clone)]
pub enum Criterion {
    /// Compared by equality or containment, depending on the field.
    Literal(String),
    /// Matches when found anywhere in the value.
    Pattern(Regex),
}

impl Criterion {
    /// Creates a literal criterion.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Compiles a pattern criterion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Returns `true` for pattern criteria.
    #[must_use]
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Tests a field value against this criterion.
    #[must_use]
    pub fn is_match(&self, value: &str, rule: LiteralRule) -> bool {
        match (self, rule) {
            (Self::Pattern(regex), _) => regex.is_match(value),
            (Self::Literal(literal), LiteralRule::Equals) => value == literal,
            (Self::Literal(literal), LiteralRule::Contains) => value.contains(literal.as_str()),
        }
    }

    /// Renders the criterion for a description: `matching /foo/`,
    /// `of "foo"` or `including "foo"`.
    #[must_use]
    pub fn describe(&self, rule: LiteralRule) -> String {
        match (self, rule) {
            (Self::Pattern(regex), _) => format!("matching {}", format::pattern(regex)),
            (Self::Literal(literal), LiteralRule::Equals) => {
                format!("of {}", format::quote(literal))
            }
            (Self::Literal(literal), LiteralRule::Contains) => {
                format!("including {}", format::quote(literal))
            }
        }
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&String> for Criterion {
    fn from(value: &String) -> Self {
        Self::Literal(value.clone())
    }
}

impl From<Regex> for Criterion {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl From<&Regex> for Criterion {
    fn from(regex: &Regex) -> Self {
        Self::Pattern(regex.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_equals_is_exact() {
        let criterion = Criterion::from("foo");
        assert!(criterion.is_match("foo", LiteralRule::Equals));
        assert!(!criterion.is_match(" - foo -", LiteralRule::Equals));
    }

    #[test]
    fn test_literal_contains_is_substring() {
        let criterion = Criterion::from("bar");
        assert!(criterion.is_match("foo bar baz", LiteralRule::Contains));
        assert!(!Criterion::from("qux").is_match("foo bar baz", LiteralRule::Contains));
    }

    #[test]
    fn test_pattern_searches_anywhere() {
        let criterion = Criterion::pattern("The Subject").unwrap();
        assert!(criterion.is_pattern());
        assert!(criterion.is_match(" -- The Subject --", LiteralRule::Equals));
        assert!(criterion.is_match(" -- The Subject --", LiteralRule::Contains));
        assert!(!Criterion::pattern("foo")
            .unwrap()
            .is_match(" -- The Subject --", LiteralRule::Equals));
    }

    #[test]
    fn test_literal_is_not_a_pattern() {
        let criterion = Criterion::from("a.c");
        assert!(!criterion.is_pattern());
        assert!(!criterion.is_match("abc", LiteralRule::Contains));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Criterion::pattern("(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Criterion::pattern("foo").unwrap().describe(LiteralRule::Equals),
            "matching /foo/"
        );
        assert_eq!(Criterion::from("foo").describe(LiteralRule::Equals), r#"of "foo""#);
        assert_eq!(
            Criterion::from("qux").describe(LiteralRule::Contains),
            r#"including "qux""#
        );
    }
}

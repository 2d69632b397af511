//! Header matcher keyed by symbolic header name.

use super::conclude;
use crate::criterion::{Criterion, LiteralRule};
use crate::format;
use crate::matcher::{MatchOutcome, Matcher};
use crate::message::Email;

/// Matcher built by [`have_header`](super::have_header).
///
/// The header is looked up by its exact symbolic key; a missing header never
/// matches.
#[derive(Debug, Clone)]
pub struct HaveHeader {
    key: String,
    criterion: Criterion,
}

impl HaveHeader {
    pub(super) fn new(key: String, criterion: Criterion) -> Self {
        Self { key, criterion }
    }

    /// Describes the expected header.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.criterion {
            Criterion::Pattern(regex) => format!(
                "have header {} with value matching {}",
                self.key,
                format::pattern(regex)
            ),
            Criterion::Literal(literal) => format!("have header {}: {literal}", self.key),
        }
    }

    /// The expectation as it reads inside the failure messages.
    fn expectation(&self) -> String {
        match &self.criterion {
            Criterion::Pattern(regex) => format!(
                "'{}' with a value matching {}",
                self.key,
                format::pattern(regex)
            ),
            Criterion::Literal(literal) => format!("'{}: {literal}'", self.key),
        }
    }
}

impl<E: Email + ?Sized> Matcher<E> for HaveHeader {
    fn description(&self) -> String {
        HaveHeader::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        let matched = email
            .header(&self.key)
            .is_some_and(|value| self.criterion.is_match(value, LiteralRule::Equals));

        let expectation = self.expectation();
        let actual = format::headers(email.headers());

        conclude(
            matched,
            self.description(),
            format!("expected the headers to include {expectation} but they were {actual}"),
            format!("expected the headers not to include {expectation} but they were {actual}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::have_header;
    use crate::message::Message;
    use regex::Regex;

    fn email() -> Message {
        Message::builder()
            .header("content_type", "text/html")
            .build()
            .unwrap()
    }

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_pattern() {
        assert!(have_header("content_type", re("text")).matches(&email()));
        assert!(!have_header("foo", re("text")).matches(&email()));
        assert!(!have_header("content_type", re("bar")).matches(&email()));
    }

    #[test]
    fn test_pattern_messages() {
        let outcome = have_header("content_type", re("bar")).evaluate(&email());
        assert_eq!(
            outcome.description,
            "have header content_type with value matching /bar/"
        );
        assert_eq!(
            outcome.failure_message,
            r#"expected the headers to include 'content_type' with a value matching /bar/ but they were {content_type: "text/html"}"#
        );

        let outcome = have_header("content_type", re("text")).evaluate(&email());
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected the headers not to include 'content_type' with a value matching /text/ but they were {content_type: "text/html"}"#
        );
    }

    #[test]
    fn test_literal_is_exact() {
        assert!(have_header("content_type", "text/html").matches(&email()));
        assert!(!have_header("foo", "text/html").matches(&email()));
        assert!(!have_header("content_type", "text").matches(&email()));
    }

    #[test]
    fn test_literal_messages() {
        let outcome = have_header("content_type", "text").evaluate(&email());
        assert_eq!(outcome.description, "have header content_type: text");
        assert_eq!(
            outcome.failure_message,
            r#"expected the headers to include 'content_type: text' but they were {content_type: "text/html"}"#
        );
    }

    #[test]
    fn test_literal_negative_message() {
        let outcome = have_header("content_type", "text/html").evaluate(&email());
        assert!(outcome.matched);
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected the headers not to include 'content_type: text/html' but they were {content_type: "text/html"}"#
        );
    }

    #[test]
    fn test_missing_header_lists_all_headers() {
        let email = Message::builder().build().unwrap();
        let outcome = have_header("content_type", "text/html").evaluate(&email);
        assert!(!outcome.matched);
        assert_eq!(
            outcome.failure_message,
            "expected the headers to include 'content_type: text/html' but they were {}"
        );
    }
}

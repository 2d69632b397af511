//! Subject matchers for a single email and for a collection of emails.

use super::conclude;
use super::text::TextField;
use crate::criterion::{Criterion, LiteralRule};
use crate::format;
use crate::matcher::{MatchOutcome, Matcher};
use crate::message::Email;

const SUBJECT: TextField = TextField {
    name: "subject",
    rule: LiteralRule::Equals,
};

/// Matcher built by [`have_subject`](super::have_subject).
#[derive(Debug, Clone)]
pub struct HaveSubject {
    criterion: Criterion,
}

impl HaveSubject {
    pub(super) fn new(criterion: Criterion) -> Self {
        Self { criterion }
    }

    /// Describes the expected subject.
    #[must_use]
    pub fn description(&self) -> String {
        SUBJECT.describe(&self.criterion)
    }
}

impl<E: Email + ?Sized> Matcher<E> for HaveSubject {
    fn description(&self) -> String {
        HaveSubject::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        SUBJECT.evaluate(&self.criterion, email.subject())
    }
}

/// Matcher built by [`include_email_with_subject`](super::include_email_with_subject).
///
/// Evaluated against a slice, vector or array of emails.
#[derive(Debug, Clone)]
pub struct IncludeEmailWithSubject {
    criterion: Criterion,
}

impl IncludeEmailWithSubject {
    pub(super) fn new(criterion: Criterion) -> Self {
        Self { criterion }
    }

    /// Describes the expected subject.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "include email with subject {}",
            self.criterion.describe(LiteralRule::Equals)
        )
    }

    fn evaluate_all<E: Email>(&self, emails: &[E]) -> MatchOutcome {
        let matched = emails
            .iter()
            .any(|email| self.criterion.is_match(email.subject(), LiteralRule::Equals));
        let subjects = format::quote_list(emails.iter().map(|email| email.subject()));

        let (failure, negative) = match &self.criterion {
            Criterion::Pattern(regex) => {
                let pattern = format::pattern(regex);
                (
                    format!(
                        "expected at least one email to have a subject matching {pattern}, but none did. Subjects were {subjects}"
                    ),
                    format!(
                        "expected no email to have a subject matching {pattern} but found at least one. Subjects were {subjects}"
                    ),
                )
            }
            Criterion::Literal(literal) => {
                let expected = format::quote(literal);
                (
                    format!(
                        "expected at least one email to have the subject {expected} but none did. Subjects were {subjects}"
                    ),
                    format!(
                        "expected no email with the subject {expected} but found at least one. Subjects were {subjects}"
                    ),
                )
            }
        };

        conclude(matched, self.description(), failure, negative)
    }
}

impl<E: Email> Matcher<[E]> for IncludeEmailWithSubject {
    fn description(&self) -> String {
        IncludeEmailWithSubject::description(self)
    }

    fn evaluate(&self, emails: &[E]) -> MatchOutcome {
        self.evaluate_all(emails)
    }
}

impl<E: Email> Matcher<Vec<E>> for IncludeEmailWithSubject {
    fn description(&self) -> String {
        IncludeEmailWithSubject::description(self)
    }

    fn evaluate(&self, emails: &Vec<E>) -> MatchOutcome {
        self.evaluate_all(emails)
    }
}

impl<E: Email, const N: usize> Matcher<[E; N]> for IncludeEmailWithSubject {
    fn description(&self) -> String {
        IncludeEmailWithSubject::description(self)
    }

    fn evaluate(&self, emails: &[E; N]) -> MatchOutcome {
        self.evaluate_all(emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{have_subject, include_email_with_subject};
    use crate::message::Message;
    use regex::Regex;

    fn email(subject: &str) -> Message {
        Message::builder().subject(subject).build().unwrap()
    }

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_have_subject_pattern() {
        let email = email(" -- The Subject --");
        assert!(have_subject(re("The Subject")).matches(&email));
        assert!(!have_subject(re("foo")).matches(&email));
    }

    #[test]
    fn test_have_subject_pattern_messages() {
        let outcome = have_subject(re("foo")).evaluate(&email("bar"));
        assert_eq!(outcome.description, "have subject matching /foo/");
        assert_eq!(
            outcome.failure_message,
            r#"expected the subject to match /foo/, but did not.  Actual subject was: "bar""#
        );

        let outcome = have_subject(re("b")).evaluate(&email("bar"));
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected the subject not to match /b/ but "bar" does match it."#
        );
    }

    #[test]
    fn test_have_subject_literal_is_exact() {
        let email = email("foo");
        assert!(have_subject("foo").matches(&email));
        assert!(!have_subject(" - foo -").matches(&email));
        assert!(!have_subject("fo").matches(&email));
    }

    #[test]
    fn test_have_subject_literal_messages() {
        let outcome = have_subject("foo").evaluate(&email("bar"));
        assert_eq!(outcome.description, r#"have subject of "foo""#);
        assert_eq!(
            outcome.failure_message,
            r#"expected the subject to be "foo" but was "bar""#
        );

        let outcome = have_subject("bar").evaluate(&email("bar"));
        assert!(outcome.matched);
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected the subject not to be "bar" but was"#
        );
    }

    #[test]
    fn test_have_subject_description_without_evaluation() {
        assert_eq!(have_subject("foo").description(), r#"have subject of "foo""#);
    }

    #[test]
    fn test_include_email_with_subject_pattern() {
        let emails = vec![email("foobar"), email("bazqux")];
        assert!(include_email_with_subject(re("foo")).matches(&emails));
        assert!(!include_email_with_subject(re("quux")).matches(&emails));
    }

    #[test]
    fn test_include_email_with_subject_literal() {
        let emails = [email("foobar"), email("bazqux")];
        assert!(include_email_with_subject("foobar").matches(&emails));
        assert!(!include_email_with_subject("foo").matches(&emails));
    }

    #[test]
    fn test_include_email_with_subject_empty_collection() {
        let emails: Vec<Message> = Vec::new();
        let outcome = include_email_with_subject(re("foo")).evaluate(&emails);
        assert!(!outcome.matched);
        assert_eq!(outcome.description, "include email with subject matching /foo/");

        let outcome = include_email_with_subject("foo").evaluate(&emails[..]);
        assert_eq!(outcome.description, r#"include email with subject of "foo""#);
    }

    #[test]
    fn test_include_email_with_subject_pattern_messages() {
        let matcher = include_email_with_subject(re("foo"));

        let outcome = matcher.evaluate(&[email("bar")]);
        assert_eq!(
            outcome.failure_message,
            r#"expected at least one email to have a subject matching /foo/, but none did. Subjects were ["bar"]"#
        );

        let outcome = matcher.evaluate(&[email("foo")]);
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected no email to have a subject matching /foo/ but found at least one. Subjects were ["foo"]"#
        );
    }

    #[test]
    fn test_include_email_with_subject_literal_messages() {
        let matcher = include_email_with_subject("foo");

        let outcome = matcher.evaluate(&[email("bar")]);
        assert_eq!(
            outcome.failure_message,
            r#"expected at least one email to have the subject "foo" but none did. Subjects were ["bar"]"#
        );

        let outcome = matcher.evaluate(&[email("foo")]);
        assert_eq!(
            outcome.negative_failure_message,
            r#"expected no email with the subject "foo" but found at least one. Subjects were ["foo"]"#
        );
    }
}

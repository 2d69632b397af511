//! The matcher contract shared by every email assertion.
//!
//! A [`Matcher`] is evaluated against one candidate and produces a
//! [`MatchOutcome`] holding the verdict together with the texts explaining it.
//! The texts quote the candidate's actual values, which is why they live on
//! the outcome rather than on the matcher.
//!
//! # Example
//!
//! ```
//! use email_matchers::{have_subject, Matcher, Message};
//!
//! let email = Message::builder().subject("bar").build().unwrap();
//! let outcome = have_subject("foo").evaluate(&email);
//!
//! assert!(!outcome.matched);
//! assert_eq!(outcome.description, r#"have subject of "foo""#);
//! assert_eq!(outcome.failure_message, r#"expected the subject to be "foo" but was "bar""#);
//! ```

/// A predicate over `T` that can explain its verdict.
///
/// Implement this trait to add your own assertions next to the built-in ones.
///
/// # Example
///
/// ```
/// use email_matchers::{Email, Matcher, MatchOutcome, Message};
///
/// struct HasNoRecipients;
///
/// impl<E: Email> Matcher<E> for HasNoRecipients {
///     fn description(&self) -> String {
///         "have no recipients".into()
///     }
///
///     fn evaluate(&self, email: &E) -> MatchOutcome {
///         let count = email.to().len();
///         MatchOutcome {
///             matched: count == 0,
///             description: Matcher::<E>::description(self),
///             failure_message: format!("expected no recipients, but found {count}"),
///             negative_failure_message: "expected recipients, but found none".into(),
///         }
///     }
/// }
///
/// let email = Message::builder().build().unwrap();
/// assert!(HasNoRecipients.matches(&email));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Describes what this matcher expects, e.g. `have subject of "foo"`.
    fn description(&self) -> String;

    /// Evaluates the candidate.
    ///
    /// Never fails: anything missing from the candidate is a mismatch.
    fn evaluate(&self, actual: &T) -> MatchOutcome;

    /// Returns `true` if the candidate satisfies this matcher.
    fn matches(&self, actual: &T) -> bool {
        self.evaluate(actual).matched
    }
}

/// The verdict of one matcher against one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Whether the candidate satisfied the matcher.
    pub matched: bool,
    /// What the matcher expects.
    pub description: String,
    /// Explains a failed positive assertion.
    pub failure_message: String,
    /// Explains a failed negated assertion.
    pub negative_failure_message: String,
}

impl MatchOutcome {
    /// Panics with the failure message unless the candidate matched.
    ///
    /// # Panics
    ///
    /// Panics if `matched` is `false`.
    #[track_caller]
    pub fn assert_matched(&self) {
        assert!(self.matched, "{}", self.failure_message);
    }

    /// Panics with the negative failure message if the candidate matched.
    ///
    /// # Panics
    ///
    /// Panics if `matched` is `true`.
    #[track_caller]
    pub fn assert_not_matched(&self) {
        assert!(!self.matched, "{}", self.negative_failure_message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsEmpty;

    impl Matcher<str> for IsEmpty {
        fn description(&self) -> String {
            "be empty".into()
        }

        fn evaluate(&self, actual: &str) -> MatchOutcome {
            MatchOutcome {
                matched: actual.is_empty(),
                description: self.description(),
                failure_message: format!("expected {actual:?} to be empty"),
                negative_failure_message: "expected a non-empty value".into(),
            }
        }
    }

    #[test]
    fn test_matches_uses_evaluate() {
        assert!(IsEmpty.matches(""));
        assert!(!IsEmpty.matches("x"));
    }

    #[test]
    fn test_assert_matched_passes() {
        IsEmpty.evaluate("").assert_matched();
        IsEmpty.evaluate("x").assert_not_matched();
    }

    #[test]
    #[should_panic(expected = r#"expected "x" to be empty"#)]
    fn test_assert_matched_panics_with_failure_message() {
        IsEmpty.evaluate("x").assert_matched();
    }

    #[test]
    #[should_panic(expected = "expected a non-empty value")]
    fn test_assert_not_matched_panics_with_negative_message() {
        IsEmpty.evaluate("").assert_not_matched();
    }
}

//! Rendering shared by the single-field text matchers (subject, body).

use super::conclude;
use crate::criterion::{Criterion, LiteralRule};
use crate::format;
use crate::matcher::MatchOutcome;

/// A named text field and how literals are compared against it.
#[derive(Debug, Clone, Copy)]
pub(super) struct TextField {
    pub(super) name: &'static str,
    pub(super) rule: LiteralRule,
}

impl TextField {
    pub(super) fn describe(self, criterion: &Criterion) -> String {
        format!("have {} {}", self.name, criterion.describe(self.rule))
    }

    pub(super) fn evaluate(self, criterion: &Criterion, value: &str) -> MatchOutcome {
        let matched = criterion.is_match(value, self.rule);
        let field = self.name;
        let actual = format::quote(value);

        let (failure, negative) = match criterion {
            Criterion::Pattern(regex) => {
                let pattern = format::pattern(regex);
                (
                    format!(
                        "expected the {field} to match {pattern}, but did not.  Actual {field} was: {actual}"
                    ),
                    format!("expected the {field} not to match {pattern} but {actual} does match it."),
                )
            }
            Criterion::Literal(literal) => {
                let expected = format::quote(literal);
                match self.rule {
                    LiteralRule::Equals => (
                        format!("expected the {field} to be {expected} but was {actual}"),
                        // Equal by definition when this fires.
                        format!("expected the {field} not to be {expected} but was"),
                    ),
                    LiteralRule::Contains => (
                        format!("expected the {field} to contain {expected} but was {actual}"),
                        format!("expected the {field} not to contain {expected} but was {actual}"),
                    ),
                }
            }
        };

        conclude(matched, self.describe(criterion), failure, negative)
    }
}

//! Body text matcher.

use super::text::TextField;
use crate::criterion::{Criterion, LiteralRule};
use crate::matcher::{MatchOutcome, Matcher};
use crate::message::Email;

const BODY: TextField = TextField {
    name: "body",
    rule: LiteralRule::Contains,
};

/// Matcher built by [`have_body_text`](super::have_body_text).
///
/// Unlike the subject matchers, a literal only has to appear somewhere in the
/// body.
#[derive(Debug, Clone)]
pub struct HaveBodyText {
    criterion: Criterion,
}

impl HaveBodyText {
    pub(super) fn new(criterion: Criterion) -> Self {
        Self { criterion }
    }

    /// Describes the expected body text.
    #[must_use]
    pub fn description(&self) -> String {
        BODY.describe(&self.criterion)
    }
}

impl<E: Email + ?Sized> Matcher<E> for HaveBodyText {
    fn description(&self) -> String {
        HaveBodyText::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        BODY.evaluate(&self.criterion, email.body())
    }
}

//! Sender matcher.

use super::conclude;
use crate::address::{Address, AddressLike};
use crate::format;
use crate::matcher::{MatchOutcome, Matcher};
use crate::message::Email;

/// Matcher built by [`deliver_from`](super::deliver_from).
///
/// The sender must equal the expected address exactly: a display name on
/// only one side is a mismatch, as is a missing sender.
#[derive(Debug, Clone)]
pub struct DeliverFrom {
    expected: Address,
}

impl DeliverFrom {
    pub(super) fn new(token: impl AddressLike) -> Self {
        Self {
            expected: token.to_address(),
        }
    }

    /// Describes the expected sender.
    #[must_use]
    pub fn description(&self) -> String {
        format!("deliver from {}", format::quote(&self.expected.to_string()))
    }
}

impl<E: Email + ?Sized> Matcher<E> for DeliverFrom {
    fn description(&self) -> String {
        DeliverFrom::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        let actual = email.from();
        let matched = actual.as_ref() == Some(&self.expected);

        let label = email.label();
        let expected = format::quote(&self.expected.to_string());
        let delivered = match &actual {
            Some(sender) => format!("it delivered from {}", format::quote(&sender.to_string())),
            None => "it had no sender".to_string(),
        };

        conclude(
            matched,
            self.description(),
            format!("expected {label} to deliver from {expected}, but {delivered}"),
            format!("expected {label} not to deliver from {expected}, but it did"),
        )
    }
}

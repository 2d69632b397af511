//! Recipient matchers: exact recipient sets and reply-to.

use super::conclude;
use crate::address::{Address, AddressLike};
use crate::format;
use crate::matcher::{MatchOutcome, Matcher};
use crate::message::Email;
use std::collections::BTreeSet;

/// Which recipient list a [`RecipientMatcher`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    /// Primary recipients.
    To,
    /// Carbon-copy recipients.
    Cc,
    /// Blind carbon-copy recipients.
    Bcc,
}

impl RecipientField {
    fn read<E: Email + ?Sized>(self, email: &E) -> Vec<Address> {
        match self {
            RecipientField::To => email.to(),
            RecipientField::Cc => email.cc(),
            RecipientField::Bcc => email.bcc(),
        }
    }

    /// Present and past verb phrases used in messages.
    fn verbs(self) -> (&'static str, &'static str) {
        match self {
            RecipientField::To => ("deliver to", "delivered to"),
            RecipientField::Cc => ("copy to", "copied to"),
            RecipientField::Bcc => ("blind copy to", "blind copied to"),
        }
    }
}

/// Matcher built by [`deliver_to`](super::deliver_to), [`cc_to`](super::cc_to)
/// and [`bcc_to`](super::bcc_to).
///
/// Matches when the normalized recipients of the field form exactly the
/// expected set.
#[derive(Debug, Clone)]
pub struct RecipientMatcher {
    field: RecipientField,
    expected: BTreeSet<Address>,
}

impl RecipientMatcher {
    pub(super) fn new<I>(field: RecipientField, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AddressLike,
    {
        Self {
            field,
            expected: tokens.into_iter().map(|t| t.to_address()).collect(),
        }
    }

    /// Returns the recipient list this matcher reads.
    #[must_use]
    pub fn field(&self) -> RecipientField {
        self.field
    }

    /// Describes the expected recipients.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} {}", self.field.verbs().0, render(&self.expected))
    }
}

impl<E: Email + ?Sized> Matcher<E> for RecipientMatcher {
    fn description(&self) -> String {
        RecipientMatcher::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        let actual: BTreeSet<Address> = self.field.read(email).into_iter().collect();
        let matched = actual == self.expected;

        let (verb, past) = self.field.verbs();
        let label = email.label();
        let expected = render(&self.expected);

        conclude(
            matched,
            self.description(),
            format!(
                "expected {label} to {verb} {expected}, but it {past} {}",
                render(&actual)
            ),
            format!("expected {label} not to {verb} {expected}, but it did"),
        )
    }
}

/// Sorted, quoted list of addresses.
fn render(addresses: &BTreeSet<Address>) -> String {
    let mut rendered: Vec<String> = addresses.iter().map(ToString::to_string).collect();
    rendered.sort();
    format::quote_list(rendered)
}

/// Matcher built by [`reply_to`](super::reply_to).
///
/// Only the first reply-to address is considered. A named reply-to entry
/// must be requested with the same name; a bare entry accepts any name.
#[derive(Debug, Clone)]
pub struct ReplyTo {
    expected: Address,
}

impl ReplyTo {
    pub(super) fn new(token: impl AddressLike) -> Self {
        Self {
            expected: token.to_address(),
        }
    }

    /// Describes the expected reply-to address.
    #[must_use]
    pub fn description(&self) -> String {
        format!("reply to {}", format::quote(&self.expected.to_string()))
    }
}

impl<E: Email + ?Sized> Matcher<E> for ReplyTo {
    fn description(&self) -> String {
        ReplyTo::description(self)
    }

    fn evaluate(&self, email: &E) -> MatchOutcome {
        let actual = email.reply_to().into_iter().next();
        let matched = actual
            .as_ref()
            .is_some_and(|a| a.is_same_mailbox(&self.expected));

        let label = email.label();
        let expected = format::quote(&self.expected.to_string());
        let replied = match &actual {
            Some(address) => format!("it replied to {}", format::quote(&address.to_string())),
            None => "it had no reply-to address".to_string(),
        };

        conclude(
            matched,
            self.description(),
            format!("expected {label} to reply to {expected}, but {replied}"),
            format!("expected {label} not to reply to {expected}, but it did"),
        )
    }
}

//! Built-in email matchers.
//!
//! Each factory builds a self-contained, immutable matcher. Recipient and
//! sender tokens are anything [`AddressLike`]; subject, body and header
//! criteria are anything [`Into<Criterion>`](Criterion): strings become
//! literals, [`Regex`](regex::Regex)es become patterns.
//!
//! | factory | literal rule | pattern rule |
//! |---|---|---|
//! | [`have_subject`] | equals | found anywhere |
//! | [`include_email_with_subject`] | equals | found anywhere |
//! | [`have_body_text`] | contains | found anywhere |
//! | [`have_header`] | equals | found anywhere |
//!
//! # Example
//!
//! ```
//! use email_matchers::{deliver_to, have_body_text, Matcher, Message};
//! use regex::Regex;
//!
//! let email = Message::builder()
//!     .to_all(["james@yahoo.com", "karen@yahoo.com"])
//!     .body("Your code is 123456.")
//!     .build()
//!     .unwrap();
//!
//! assert!(deliver_to(["karen@yahoo.com", "james@yahoo.com"]).matches(&email));
//! assert!(!deliver_to(["karen@yahoo.com"]).matches(&email));
//! assert!(have_body_text(Regex::new(r"\d{6}").unwrap()).matches(&email));
//! ```

mod body;
mod header;
mod recipient;
mod sender;
mod subject;
mod text;

pub use body::HaveBodyText;
pub use header::HaveHeader;
pub use recipient::{RecipientField, RecipientMatcher, ReplyTo};
pub use sender::DeliverFrom;
pub use subject::{HaveSubject, IncludeEmailWithSubject};

use crate::address::AddressLike;
use crate::criterion::Criterion;
use crate::matcher::MatchOutcome;
use tracing::debug;

/// Matches when the email's `to` recipients are exactly the given addresses.
///
/// Order does not matter, but a subset or superset of the actual recipients
/// does not match.
#[must_use]
pub fn deliver_to<I>(tokens: I) -> RecipientMatcher
where
    I: IntoIterator,
    I::Item: AddressLike,
{
    RecipientMatcher::new(RecipientField::To, tokens)
}

/// Matches when the email's `cc` recipients are exactly the given addresses.
#[must_use]
pub fn cc_to<I>(tokens: I) -> RecipientMatcher
where
    I: IntoIterator,
    I::Item: AddressLike,
{
    RecipientMatcher::new(RecipientField::Cc, tokens)
}

/// Matches when the email's `bcc` recipients are exactly the given addresses.
#[must_use]
pub fn bcc_to<I>(tokens: I) -> RecipientMatcher
where
    I: IntoIterator,
    I::Item: AddressLike,
{
    RecipientMatcher::new(RecipientField::Bcc, tokens)
}

/// Matches when the email's first reply-to address is the given one.
#[must_use]
pub fn reply_to(token: impl AddressLike) -> ReplyTo {
    ReplyTo::new(token)
}

/// Matches when the email's sender is the given address, display name included.
#[must_use]
pub fn deliver_from(token: impl AddressLike) -> DeliverFrom {
    DeliverFrom::new(token)
}

/// Matches when the subject equals a literal or contains a pattern match.
#[must_use]
pub fn have_subject(criterion: impl Into<Criterion>) -> HaveSubject {
    HaveSubject::new(criterion.into())
}

/// Matches a collection of emails when at least one has a matching subject.
#[must_use]
pub fn include_email_with_subject(criterion: impl Into<Criterion>) -> IncludeEmailWithSubject {
    IncludeEmailWithSubject::new(criterion.into())
}

/// Matches when the body contains a literal or a pattern match.
#[must_use]
pub fn have_body_text(criterion: impl Into<Criterion>) -> HaveBodyText {
    HaveBodyText::new(criterion.into())
}

/// Matches when a header is present and its value equals a literal or
/// contains a pattern match.
#[must_use]
pub fn have_header(key: impl Into<String>, criterion: impl Into<Criterion>) -> HaveHeader {
    HaveHeader::new(key.into(), criterion.into())
}

/// Assembles an outcome and records the verdict.
fn conclude(
    matched: bool,
    description: String,
    failure_message: String,
    negative_failure_message: String,
) -> MatchOutcome {
    debug!(matcher = %description, matched, "Evaluated email matcher");
    MatchOutcome {
        matched,
        description,
        failure_message,
        negative_failure_message,
    }
}
